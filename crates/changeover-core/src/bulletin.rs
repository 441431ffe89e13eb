//! 工序表（Operation Bulletin）記錄

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 機台類型 → 需求台數
pub type RequirementMap = BTreeMap<String, u32>;

/// 機台類型 → 可用台數
pub type AvailabilityMap = BTreeMap<String, u32>;

/// 工序記錄（由工序表匯入器產生）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// 工序名稱
    pub operation: String,

    /// 機台類型
    pub machine_type: String,

    /// 標準工時（分鐘）
    pub standard_minute_value: Decimal,

    /// 需求機台數
    ///
    /// 匯入資料可能帶入 0 或負值，由彙總時檢查，因此使用有號整數
    pub units_needed: i64,
}

impl OperationRecord {
    /// 創建新的工序記錄
    pub fn new(
        operation: impl Into<String>,
        machine_type: impl Into<String>,
        standard_minute_value: Decimal,
        units_needed: i64,
    ) -> Self {
        Self {
            operation: operation.into(),
            machine_type: machine_type.into(),
            standard_minute_value,
            units_needed,
        }
    }

    /// 去除前後空白後的機台類型
    pub fn machine_type_key(&self) -> &str {
        self.machine_type.trim()
    }

    /// 檢查記錄是否可被彙總，失敗時回傳原因
    pub fn check(&self) -> Result<(), String> {
        if self.machine_type_key().is_empty() {
            return Err(format!("工序 '{}' 未指定機台類型", self.operation));
        }
        if self.units_needed <= 0 {
            return Err(format!(
                "工序 '{}' 的機台數必須為正數，實際為 {}",
                self.operation, self.units_needed
            ));
        }
        Ok(())
    }
}
