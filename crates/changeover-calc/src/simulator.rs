//! 換款模擬主流程

use changeover_core::{CapacityError, FeasibilityConfig, OperationRecord, WorkCalendar};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::aggregation::RequirementAggregator;
use crate::date_search::DateSearch;
use crate::intake::StyleRequirementsProvider;
use crate::inventory::InventoryProvider;
use crate::planner::ChangeoverPlanner;
use crate::{SimulationReport, SimulationWarning};

/// 模擬請求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// 目前產線
    pub line: String,

    /// 新款號
    pub style_code: String,

    /// 預定換款日期
    pub tentative_date: NaiveDate,
}

impl SimulationRequest {
    pub fn new(
        line: impl Into<String>,
        style_code: impl Into<String>,
        tentative_date: NaiveDate,
    ) -> Self {
        Self {
            line: line.into(),
            style_code: style_code.into(),
            tentative_date,
        }
    }
}

/// 換款模擬器
///
/// 本身不持有可變狀態，可由多個請求同時使用
pub struct ChangeoverSimulator {
    /// 引擎配置
    config: FeasibilityConfig,

    /// 工作日曆（僅在 `respect_work_calendar` 時使用）
    calendar: WorkCalendar,
}

impl ChangeoverSimulator {
    /// 創建新的模擬器
    pub fn new(config: FeasibilityConfig) -> Self {
        Self {
            config,
            calendar: WorkCalendar::default(),
        }
    }

    /// 建構器模式：設置工作日曆
    pub fn with_calendar(mut self, calendar: WorkCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// 主模擬入口
    ///
    /// 配置不一致或工序記錄無效時整個模擬中止，不會產生部分計劃
    pub fn simulate<P>(
        &self,
        request: &SimulationRequest,
        operations: &[OperationRecord],
        inventory: &P,
    ) -> changeover_core::Result<SimulationReport>
    where
        P: InventoryProvider + ?Sized,
    {
        tracing::info!(
            "開始換款模擬：{} → {}，預定日期 {}，工序 {} 筆",
            request.line,
            request.style_code,
            request.tentative_date,
            operations.len()
        );
        let start_time = std::time::Instant::now();

        self.config.validate()?;

        // Step 1: 需求彙總
        tracing::debug!("Step 1: 需求彙總");
        let requirements = RequirementAggregator::aggregate(operations)?;

        // Step 2: 預定日期的可用量
        tracing::debug!("Step 2: 取得 {} 的機台可用量", request.tentative_date);
        let availability = inventory.snapshot(request.tentative_date);

        let mut warnings = Vec::new();
        let fleet_types: BTreeSet<String> = inventory.machine_types().into_iter().collect();
        for machine_type in requirements.keys().filter(|t| !fleet_types.contains(*t)) {
            warnings.push(SimulationWarning::warning(
                machine_type.clone(),
                format!("車隊中沒有 {} 類型的機台", machine_type),
            ));
        }

        // Step 3: 組裝計劃
        tracing::debug!("Step 3: 組裝換款計劃");
        let plan = ChangeoverPlanner::build_with_policy(
            &request.line,
            &request.style_code,
            request.tentative_date,
            &requirements,
            &availability,
            &self.config.risk_policy,
        );

        // Step 4: 建議日期
        tracing::debug!("Step 4: 搜尋建議日期");
        let suggested_date = if self.config.respect_work_calendar {
            DateSearch::find_earliest_on_calendar(
                &requirements,
                inventory,
                request.tentative_date,
                self.config.search_horizon_days,
                &self.calendar,
            )?
        } else {
            DateSearch::find_earliest(
                &requirements,
                inventory,
                request.tentative_date,
                self.config.search_horizon_days,
            )?
        };

        match suggested_date.date() {
            Some(date) if date > request.tentative_date => {
                warnings.push(SimulationWarning::info(
                    request.style_code.clone(),
                    format!("預定日期 {} 不可行，最早可於 {} 換款", request.tentative_date, date),
                ));
            }
            Some(_) => {}
            None => {
                warnings.push(SimulationWarning::error(
                    request.style_code.clone(),
                    format!(
                        "{} 天內沒有可行的換款日期，請擴大範圍或調整需求",
                        self.config.search_horizon_days
                    ),
                ));
            }
        }

        tracing::info!(
            "換款模擬完成，耗時 {:?}，風險 {}，建議日期 {:?}",
            start_time.elapsed(),
            plan.risk_level(),
            suggested_date.date()
        );

        Ok(SimulationReport {
            plan,
            suggested_date,
            warnings,
        })
    }

    /// 由款式目錄取得工序後模擬
    pub fn simulate_style<S, P>(
        &self,
        request: &SimulationRequest,
        styles: &S,
        inventory: &P,
    ) -> changeover_core::Result<SimulationReport>
    where
        S: StyleRequirementsProvider + ?Sized,
        P: InventoryProvider + ?Sized,
    {
        let operations = styles
            .operations(&request.style_code)
            .ok_or_else(|| CapacityError::UnknownStyle(request.style_code.clone()))?;
        self.simulate(request, &operations, inventory)
    }

    /// 取得配置
    pub fn config(&self) -> &FeasibilityConfig {
        &self.config
    }
}

impl Default for ChangeoverSimulator {
    fn default() -> Self {
        Self::new(FeasibilityConfig::default())
    }
}
