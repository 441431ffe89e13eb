//! # Changeover Calculation Engine
//!
//! 換款產能可行性計算引擎

pub mod aggregation;
pub mod dashboard;
pub mod date_search;
pub mod feasibility;
pub mod intake;
pub mod inventory;
pub mod planner;
pub mod risk;
pub mod simulator;

// Re-export 主要類型
pub use aggregation::RequirementAggregator;
pub use dashboard::{DashboardSummary, UpcomingChangeover};
pub use date_search::{DailyFeasibility, DateSearch, DateSearchOutcome};
pub use feasibility::FeasibilityCalculator;
pub use intake::{IntakeSummary, StyleCatalog, StyleIntake, StyleRequirementsProvider};
pub use inventory::{AvailabilityLookup, FleetInventory, InventoryProvider, Occupancy, StatusCounts};
pub use planner::ChangeoverPlanner;
pub use risk::RiskClassifier;
pub use simulator::{ChangeoverSimulator, SimulationRequest};

use serde::Serialize;

/// 換款模擬結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// 預定日期的換款計劃
    pub plan: changeover_core::ChangeoverPlan,

    /// 建議日期（預定日期起的最早可行日）
    pub suggested_date: DateSearchOutcome,

    /// 警告信息
    pub warnings: Vec<SimulationWarning>,
}

impl SimulationReport {
    /// 匯出 JSON 報表
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 模擬警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationWarning {
    /// 機台類型或款號
    pub subject: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl SimulationWarning {
    pub fn new(subject: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn info(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Info)
    }

    pub fn warning(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Warning)
    }

    pub fn error(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
