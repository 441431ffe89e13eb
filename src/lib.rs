//! # Changeover
//!
//! 成衣廠換款產能可行性引擎
//!
//! 對外提供五個入口：需求彙總、可行性差異、風險分級、最早可行日期搜尋與換款計劃組裝。
//! 所有計算皆為純函式，輸入為已解析好的資料；不讀取系統時間，不含隨機性。

pub mod logging;

use chrono::NaiveDate;

pub use changeover_calc::{
    AvailabilityLookup, ChangeoverSimulator, DashboardSummary, DateSearch, DateSearchOutcome,
    FleetInventory, InventoryProvider, SimulationReport, SimulationRequest, StatusCounts,
    StyleCatalog, StyleIntake, StyleRequirementsProvider,
};
pub use changeover_core::{
    Assignment, AvailabilityMap, CapacityError, ChangeoverPlan, FeasibilityConfig,
    FeasibilityResult, MachineUnit, MaintenanceWindow, OperationRecord, RequirementMap, Result,
    RiskLevel, RiskPolicy, WorkCalendar,
};

/// 依機台類型加總工序的需求台數
pub fn aggregate_requirements(operations: &[OperationRecord]) -> Result<RequirementMap> {
    changeover_calc::RequirementAggregator::aggregate(operations)
}

/// 計算每種機台類型的盈餘/短缺，短缺最多者在前
pub fn compute_feasibility(
    requirements: &RequirementMap,
    availability: &AvailabilityMap,
) -> Vec<FeasibilityResult> {
    changeover_calc::FeasibilityCalculator::compute(requirements, availability)
}

/// 依短缺總數分級風險
pub fn classify_risk(results: &[FeasibilityResult]) -> RiskLevel {
    changeover_calc::RiskClassifier::classify(results)
}

/// 搜尋 `search_start` 起 `search_horizon_days` 天內的最早可行日期
pub fn find_earliest_feasible_date<L>(
    requirements: &RequirementMap,
    availability_lookup: &L,
    search_start: NaiveDate,
    search_horizon_days: u32,
) -> Result<DateSearchOutcome>
where
    L: AvailabilityLookup + ?Sized,
{
    DateSearch::find_earliest(requirements, availability_lookup, search_start, search_horizon_days)
}

/// 組裝換款計劃
pub fn build_changeover_plan(
    line: &str,
    style_code: &str,
    candidate_date: NaiveDate,
    requirements: &RequirementMap,
    availability: &AvailabilityMap,
) -> ChangeoverPlan {
    changeover_calc::ChangeoverPlanner::build(
        line,
        style_code,
        candidate_date,
        requirements,
        availability,
    )
}
