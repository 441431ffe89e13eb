//! 控制中心摘要

use changeover_core::{ChangeoverPlan, RiskLevel};
use chrono::NaiveDate;
use serde::Serialize;

use crate::inventory::StatusCounts;

/// 即將進行的換款
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingChangeover {
    pub style_code: String,
    pub line: String,
    pub date: NaiveDate,
    pub risk_level: RiskLevel,
    pub shortage: u64,
}

impl From<&ChangeoverPlan> for UpcomingChangeover {
    fn from(plan: &ChangeoverPlan) -> Self {
        Self {
            style_code: plan.style_code().to_string(),
            line: plan.line().to_string(),
            date: plan.candidate_date(),
            risk_level: plan.risk_level(),
            shortage: plan.total_shortage(),
        }
    }
}

/// 控制中心摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// 全車隊各狀態台數
    pub fleet: StatusCounts,

    /// 需要關注的換款數（Medium 以上）
    pub risky_changeovers: usize,

    /// 依日期、產線排序的換款列表
    pub upcoming: Vec<UpcomingChangeover>,
}

impl DashboardSummary {
    pub fn build(fleet: StatusCounts, plans: &[ChangeoverPlan]) -> Self {
        let mut upcoming: Vec<UpcomingChangeover> =
            plans.iter().map(UpcomingChangeover::from).collect();
        upcoming.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.line.cmp(&b.line))
                .then_with(|| a.style_code.cmp(&b.style_code))
        });

        let risky_changeovers = upcoming
            .iter()
            .filter(|c| c.risk_level.needs_attention())
            .count();

        Self {
            fleet,
            risky_changeovers,
            upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changeover_core::{FeasibilityResult, RiskPolicy};

    fn plan(style: &str, line: &str, day: u32, shortage: u32) -> ChangeoverPlan {
        ChangeoverPlan::from_results(
            line,
            style,
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            vec![FeasibilityResult::new("Single Needle", 10 + shortage, 10)],
            &RiskPolicy::default(),
        )
    }

    #[test]
    fn test_build_summary() {
        let plans = vec![
            plan("ST-5523", "Line 7", 18, 4),
            plan("ST-7842", "Line 3", 15, 3),
            plan("ST-8134", "Line 1", 17, 0),
            plan("ST-6291", "Line 5", 16, 1),
        ];
        let fleet = StatusCounts {
            available: 89,
            busy: 127,
            releasing: 34,
            maintenance: 6,
        };

        let summary = DashboardSummary::build(fleet, &plans);

        assert_eq!(summary.fleet.busy, 127);
        assert_eq!(summary.risky_changeovers, 3);
        let order: Vec<&str> = summary.upcoming.iter().map(|c| c.style_code.as_str()).collect();
        assert_eq!(order, vec!["ST-7842", "ST-6291", "ST-8134", "ST-5523"]);
        assert_eq!(summary.upcoming[3].risk_level, RiskLevel::High);
        assert_eq!(summary.upcoming[3].shortage, 4);
    }
}
