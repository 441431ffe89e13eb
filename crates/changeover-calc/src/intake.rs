//! 新款式建檔與工序表檢核

use changeover_core::{CapacityError, OperationRecord, RequirementMap};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::aggregation::RequirementAggregator;

/// 款式需求提供者（通常由工序表匯入）
pub trait StyleRequirementsProvider {
    /// 取得款式的工序記錄，款式不存在時回傳 `None`
    fn operations(&self, style_code: &str) -> Option<Vec<OperationRecord>>;
}

/// 記憶體中的款式目錄
#[derive(Debug, Clone, Default)]
pub struct StyleCatalog {
    styles: BTreeMap<String, Vec<OperationRecord>>,
}

impl StyleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加或取代款式的工序表
    pub fn insert(&mut self, style_code: impl Into<String>, operations: Vec<OperationRecord>) {
        self.styles.insert(style_code.into(), operations);
    }

    /// 登錄已檢核的款式
    pub fn register(&mut self, intake: &StyleIntake) -> changeover_core::Result<IntakeSummary> {
        let summary = intake.validate()?;
        self.insert(intake.style_code.trim(), intake.operations.clone());
        Ok(summary)
    }

    pub fn style_codes(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}

impl StyleRequirementsProvider for StyleCatalog {
    fn operations(&self, style_code: &str) -> Option<Vec<OperationRecord>> {
        self.styles.get(style_code).cloned()
    }
}

/// 新款式建檔資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleIntake {
    /// 款號
    pub style_code: String,

    /// 訂單數量
    pub order_quantity: u32,

    /// 目標效率（%）
    pub target_efficiency_pct: Decimal,

    /// 預計開始日期
    pub planned_start_date: Option<NaiveDate>,

    /// 工序表
    pub operations: Vec<OperationRecord>,
}

impl StyleIntake {
    /// 創建新的款式建檔（目標效率預設 75%）
    pub fn new(style_code: impl Into<String>, order_quantity: u32) -> Self {
        Self {
            style_code: style_code.into(),
            order_quantity,
            target_efficiency_pct: Decimal::from(75),
            planned_start_date: None,
            operations: Vec::new(),
        }
    }

    /// 建構器模式：設置目標效率
    pub fn with_target_efficiency(mut self, pct: Decimal) -> Self {
        self.target_efficiency_pct = pct;
        self
    }

    /// 建構器模式：設置預計開始日期
    pub fn with_planned_start_date(mut self, date: NaiveDate) -> Self {
        self.planned_start_date = Some(date);
        self
    }

    /// 建構器模式：設置工序表
    pub fn with_operations(mut self, operations: Vec<OperationRecord>) -> Self {
        self.operations = operations;
        self
    }

    /// 檢核建檔資料並產生摘要
    pub fn validate(&self) -> changeover_core::Result<IntakeSummary> {
        if self.style_code.trim().is_empty() {
            return Err(CapacityError::InvalidStyleIntake("款號不可為空".to_string()));
        }
        if self.order_quantity == 0 {
            return Err(CapacityError::InvalidStyleIntake(format!(
                "款式 {} 的訂單數量必須大於 0",
                self.style_code
            )));
        }
        if self.target_efficiency_pct <= Decimal::ZERO
            || self.target_efficiency_pct > Decimal::ONE_HUNDRED
        {
            return Err(CapacityError::InvalidStyleIntake(format!(
                "款式 {} 的目標效率 {}% 不在 (0, 100] 範圍內",
                self.style_code, self.target_efficiency_pct
            )));
        }
        if self.operations.is_empty() {
            return Err(CapacityError::InvalidStyleIntake(format!(
                "款式 {} 尚未上傳工序表",
                self.style_code
            )));
        }

        let requirements = RequirementAggregator::aggregate(&self.operations)?;

        Ok(IntakeSummary {
            style_code: self.style_code.trim().to_string(),
            operation_count: self.operations.len(),
            total_smv: self.operations.iter().map(|op| op.standard_minute_value).sum(),
            machine_types: requirements.keys().cloned().collect(),
            requirements,
        })
    }
}

/// 款式建檔摘要（檢核步驟顯示用）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntakeSummary {
    pub style_code: String,
    pub operation_count: usize,
    /// 單件總標準工時（分鐘）
    pub total_smv: Decimal,
    pub machine_types: Vec<String>,
    pub requirements: RequirementMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bulletin() -> Vec<OperationRecord> {
        vec![
            OperationRecord::new("Collar Attach", "Single Needle", Decimal::new(125, 2), 1),
            OperationRecord::new("Side Seam", "Overlock 5T", Decimal::new(85, 2), 2),
            OperationRecord::new("Hem Bottom", "Flatlock", Decimal::new(65, 2), 1),
            OperationRecord::new("Button Hole", "Button Hole", Decimal::new(45, 2), 4),
            OperationRecord::new("Button Attach", "Button Attach", Decimal::new(55, 2), 4),
            OperationRecord::new("Bartack", "Bartack", Decimal::new(35, 2), 8),
        ]
    }

    #[test]
    fn test_validate_builds_summary() {
        let intake = StyleIntake::new("ST-8542", 1200)
            .with_planned_start_date(NaiveDate::from_ymd_opt(2025, 1, 22).unwrap())
            .with_operations(bulletin());

        let summary = intake.validate().unwrap();

        assert_eq!(summary.style_code, "ST-8542");
        assert_eq!(summary.operation_count, 6);
        assert_eq!(summary.total_smv, Decimal::new(410, 2));
        assert_eq!(summary.machine_types.len(), 6);
        assert_eq!(summary.requirements["Bartack"], 8);
    }

    #[test]
    fn test_validate_rejects_bad_header() {
        let blank = StyleIntake::new("  ", 100).with_operations(bulletin());
        assert!(matches!(blank.validate(), Err(CapacityError::InvalidStyleIntake(_))));

        let zero_qty = StyleIntake::new("ST-1", 0).with_operations(bulletin());
        assert!(matches!(zero_qty.validate(), Err(CapacityError::InvalidStyleIntake(_))));

        let over = StyleIntake::new("ST-1", 10)
            .with_target_efficiency(Decimal::from(120))
            .with_operations(bulletin());
        assert!(matches!(over.validate(), Err(CapacityError::InvalidStyleIntake(_))));

        let no_bulletin = StyleIntake::new("ST-1", 10);
        assert!(matches!(no_bulletin.validate(), Err(CapacityError::InvalidStyleIntake(_))));
    }

    #[test]
    fn test_validate_propagates_bad_operation() {
        let mut operations = bulletin();
        operations[2].units_needed = 0;
        let intake = StyleIntake::new("ST-1", 10).with_operations(operations);

        assert!(matches!(
            intake.validate(),
            Err(CapacityError::InvalidOperationRecord { index: 2, .. })
        ));
    }

    #[test]
    fn test_catalog_register_and_lookup() {
        let mut catalog = StyleCatalog::new();
        let intake = StyleIntake::new("ST-7291", 500).with_operations(bulletin());

        catalog.register(&intake).unwrap();

        assert_eq!(catalog.operations("ST-7291").map(|ops| ops.len()), Some(6));
        assert!(catalog.operations("ST-0000").is_none());
        assert_eq!(catalog.style_codes().collect::<Vec<_>>(), vec!["ST-7291"]);
    }
}
