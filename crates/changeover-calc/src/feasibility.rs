//! 需求與可用量差異計算

use changeover_core::{AvailabilityMap, FeasibilityResult, RequirementMap};
use std::collections::BTreeSet;

/// 可行性差異計算器
pub struct FeasibilityCalculator;

impl FeasibilityCalculator {
    /// 計算每種機台類型的盈餘/短缺
    ///
    /// 結果涵蓋需求與可用量兩邊的所有機台類型（缺少的一邊視為 0），
    /// 依盈餘由小到大排序（短缺最多者在前），同盈餘時依機台類型字典序。
    pub fn compute(
        requirements: &RequirementMap,
        availability: &AvailabilityMap,
    ) -> Vec<FeasibilityResult> {
        let machine_types: BTreeSet<&String> =
            requirements.keys().chain(availability.keys()).collect();

        let mut results: Vec<FeasibilityResult> = machine_types
            .into_iter()
            .map(|machine_type| {
                let required = requirements.get(machine_type).copied().unwrap_or(0);
                let available = availability.get(machine_type).copied().unwrap_or(0);
                FeasibilityResult::new(machine_type.clone(), required, available)
            })
            .collect();

        results.sort_by(|a, b| {
            a.surplus()
                .cmp(&b.surplus())
                .then_with(|| a.machine_type().cmp(b.machine_type()))
        });

        results
    }

    /// 檢查需求是否在可用量下完全滿足
    pub fn is_fully_feasible(results: &[FeasibilityResult]) -> bool {
        results.iter().all(|r| r.surplus() >= 0)
    }
}
