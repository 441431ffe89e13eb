//! # Changeover Core
//!
//! 換款產能可行性的核心資料模型與類型定義

pub mod bulletin;
pub mod calendar;
pub mod config;
pub mod feasibility;
pub mod fleet;
pub mod plan;
pub mod risk;

// Re-export 主要類型
pub use bulletin::{AvailabilityMap, OperationRecord, RequirementMap};
pub use calendar::WorkCalendar;
pub use config::FeasibilityConfig;
pub use feasibility::{FeasibilityResult, MachineAvailabilitySnapshot, MachineTypeRequirement};
pub use fleet::{Assignment, MachineStatus, MachineUnit, MaintenanceWindow};
pub use plan::ChangeoverPlan;
pub use risk::{RiskLevel, RiskPolicy};

/// 產能可行性錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CapacityError {
    #[error("無效的工序記錄（第 {index} 筆）: {reason}")]
    InvalidOperationRecord { index: usize, reason: String },

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("無效的款式資料: {0}")]
    InvalidStyleIntake(String),

    #[error("找不到款式: {0}")]
    UnknownStyle(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

impl CapacityError {
    /// 建立工序記錄錯誤
    pub fn invalid_operation(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidOperationRecord {
            index,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CapacityError>;
