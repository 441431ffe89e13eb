//! 換款風險分級

use changeover_core::{plan, FeasibilityResult, RiskLevel, RiskPolicy};

/// 風險分級器
pub struct RiskClassifier;

impl RiskClassifier {
    /// 以預設門檻分級：0 為 Low，1..=3 為 Medium，超過 3 為 High
    ///
    /// 只看短缺總數，不考慮盈餘多寡或機台類型的重要性
    pub fn classify(results: &[FeasibilityResult]) -> RiskLevel {
        Self::classify_with_policy(results, &RiskPolicy::default())
    }

    /// 以自訂門檻分級
    pub fn classify_with_policy(results: &[FeasibilityResult], policy: &RiskPolicy) -> RiskLevel {
        policy.classify(Self::total_shortage(results))
    }

    /// 短缺總數
    pub fn total_shortage(results: &[FeasibilityResult]) -> u64 {
        plan::total_shortage(results)
    }
}
