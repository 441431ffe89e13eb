//! 換款計劃（模擬結果）

use chrono::NaiveDate;
use serde::Serialize;

use crate::{FeasibilityResult, RiskLevel, RiskPolicy};

/// 換款計劃
///
/// 每次模擬重新建立，回傳後不可變更；彙總欄位與風險等級在建構時由結果序列算出
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeoverPlan {
    line: String,
    style_code: String,
    candidate_date: NaiveDate,
    results: Vec<FeasibilityResult>,
    total_shortage: u64,
    total_surplus: u64,
    risk_level: RiskLevel,
}

impl ChangeoverPlan {
    /// 由已排序的可行性結果建立計劃
    pub fn from_results(
        line: impl Into<String>,
        style_code: impl Into<String>,
        candidate_date: NaiveDate,
        results: Vec<FeasibilityResult>,
        policy: &RiskPolicy,
    ) -> Self {
        let total_shortage = total_shortage(&results);
        let total_surplus = results.iter().map(FeasibilityResult::surplus_units).sum();

        Self {
            line: line.into(),
            style_code: style_code.into(),
            candidate_date,
            results,
            total_shortage,
            total_surplus,
            risk_level: policy.classify(total_shortage),
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn style_code(&self) -> &str {
        &self.style_code
    }

    pub fn candidate_date(&self) -> NaiveDate {
        self.candidate_date
    }

    /// 可行性結果（短缺最多者在前）
    pub fn results(&self) -> &[FeasibilityResult] {
        &self.results
    }

    pub fn total_shortage(&self) -> u64 {
        self.total_shortage
    }

    pub fn total_surplus(&self) -> u64 {
        self.total_surplus
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    /// 檢查所有機台類型是否皆無短缺
    pub fn is_fully_feasible(&self) -> bool {
        self.total_shortage == 0
    }

    /// 有短缺的機台類型
    pub fn shortages(&self) -> impl Iterator<Item = &FeasibilityResult> {
        self.results.iter().filter(|r| r.is_short())
    }

    /// 匯出 JSON 報表
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 短缺總數：所有負盈餘的絕對值之和
pub fn total_shortage(results: &[FeasibilityResult]) -> u64 {
    results.iter().map(FeasibilityResult::shortage_units).sum()
}
