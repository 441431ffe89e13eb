//! 換款計劃組裝

use changeover_core::{AvailabilityMap, ChangeoverPlan, RequirementMap, RiskPolicy};
use chrono::NaiveDate;

use crate::feasibility::FeasibilityCalculator;

/// 換款計劃組裝器
pub struct ChangeoverPlanner;

impl ChangeoverPlanner {
    /// 以預設風險門檻組裝計劃
    pub fn build(
        line: &str,
        style_code: &str,
        candidate_date: NaiveDate,
        requirements: &RequirementMap,
        availability: &AvailabilityMap,
    ) -> ChangeoverPlan {
        Self::build_with_policy(
            line,
            style_code,
            candidate_date,
            requirements,
            availability,
            &RiskPolicy::default(),
        )
    }

    /// 組裝計劃：差異計算 → 彙總 → 風險分級
    pub fn build_with_policy(
        line: &str,
        style_code: &str,
        candidate_date: NaiveDate,
        requirements: &RequirementMap,
        availability: &AvailabilityMap,
        policy: &RiskPolicy,
    ) -> ChangeoverPlan {
        let results = FeasibilityCalculator::compute(requirements, availability);
        let plan = ChangeoverPlan::from_results(line, style_code, candidate_date, results, policy);

        tracing::debug!(
            "換款計劃 {} / {} @ {}: 短缺 {}，盈餘 {}，風險 {}",
            line,
            style_code,
            candidate_date,
            plan.total_shortage(),
            plan.total_surplus(),
            plan.risk_level()
        );

        plan
    }
}
