//! 可行性引擎配置

use serde::{Deserialize, Serialize};

use crate::{CapacityError, RiskPolicy};

/// 可行性引擎配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeasibilityConfig {
    /// 風險分級門檻
    pub risk_policy: RiskPolicy,

    /// 建議日期的搜尋範圍（天）
    pub search_horizon_days: u32,

    /// 「即將釋出」判定範圍（天）
    pub releasing_window_days: u32,

    /// 搜尋建議日期時是否跳過非工作日
    /// - false: 逐日掃描（預設）
    /// - true: 依工作日曆跳過週末與節假日
    pub respect_work_calendar: bool,
}

impl FeasibilityConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            risk_policy: RiskPolicy::default(),
            search_horizon_days: 30,
            releasing_window_days: 7,
            respect_work_calendar: false,
        }
    }

    /// 建構器模式：設置風險門檻
    pub fn with_risk_policy(mut self, policy: RiskPolicy) -> Self {
        self.risk_policy = policy;
        self
    }

    /// 建構器模式：設置搜尋範圍
    pub fn with_search_horizon(mut self, days: u32) -> Self {
        self.search_horizon_days = days;
        self
    }

    /// 建構器模式：設置即將釋出範圍
    pub fn with_releasing_window(mut self, days: u32) -> Self {
        self.releasing_window_days = days;
        self
    }

    /// 建構器模式：設置是否依工作日曆搜尋
    pub fn with_respect_work_calendar(mut self, respect: bool) -> Self {
        self.respect_work_calendar = respect;
        self
    }

    /// 從 JSON 載入配置，缺少的欄位使用預設值
    ///
    /// ```
    /// # use changeover_core::FeasibilityConfig;
    /// let config = FeasibilityConfig::from_json_str(r#"{ "search_horizon_days": 45 }"#).unwrap();
    /// assert_eq!(config.search_horizon_days, 45);
    /// assert_eq!(config.releasing_window_days, 7);
    /// ```
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CapacityError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 檢查配置是否一致
    pub fn validate(&self) -> crate::Result<()> {
        if !self.risk_policy.is_consistent() {
            return Err(CapacityError::InvalidConfig(format!(
                "高風險門檻 {} 低於中風險門檻 {}",
                self.risk_policy.high_above, self.risk_policy.medium_above
            )));
        }
        if self.search_horizon_days == 0 {
            return Err(CapacityError::InvalidConfig(
                "搜尋範圍必須至少 1 天".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for FeasibilityConfig {
    fn default() -> Self {
        Self::new()
    }
}
