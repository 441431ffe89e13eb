//! 換款風險等級

use serde::{Deserialize, Serialize};
use std::fmt;

/// 風險等級（Low < Medium < High）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// 無短缺
    Low,
    /// 少量短缺
    Medium,
    /// 嚴重短缺
    High,
}

impl RiskLevel {
    /// 顯示用標籤
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    /// 是否需要關注（Medium 以上）
    pub fn needs_attention(&self) -> bool {
        *self >= RiskLevel::Medium
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 風險分級門檻
///
/// 短缺總數 `<= medium_above` 為 Low，`<= high_above` 為 Medium，其餘為 High
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPolicy {
    pub medium_above: u64,
    pub high_above: u64,
}

impl RiskPolicy {
    pub fn new(medium_above: u64, high_above: u64) -> Self {
        Self {
            medium_above,
            high_above,
        }
    }

    /// 依短缺總數分級
    pub fn classify(&self, total_shortage: u64) -> RiskLevel {
        if total_shortage > self.high_above {
            RiskLevel::High
        } else if total_shortage > self.medium_above {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// 檢查門檻是否一致
    pub fn is_consistent(&self) -> bool {
        self.high_above >= self.medium_above
    }
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self::new(0, 3)
    }
}
