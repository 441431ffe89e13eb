//! 最早可行日期搜尋

use changeover_core::{
    AvailabilityMap, CapacityError, RequirementMap, RiskLevel, RiskPolicy, WorkCalendar,
};
use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::feasibility::FeasibilityCalculator;
use crate::inventory::AvailabilityLookup;
use crate::risk::RiskClassifier;

/// 日期搜尋結果
///
/// `NotFound` 不是錯誤：呼叫端應擴大搜尋範圍或放寬需求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DateSearchOutcome {
    /// 找到最早可行日期
    Found { date: NaiveDate, offset_days: u32 },
    /// 搜尋範圍內沒有可行日期
    NotFound {
        search_start: NaiveDate,
        horizon_days: u32,
    },
}

impl DateSearchOutcome {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DateSearchOutcome::Found { date, .. } => Some(*date),
            DateSearchOutcome::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DateSearchOutcome::Found { .. })
    }
}

/// 單日可行性（機台日曆檢視用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyFeasibility {
    pub date: NaiveDate,
    pub total_shortage: u64,
    pub risk_level: RiskLevel,
}

/// 日期搜尋器
pub struct DateSearch;

impl DateSearch {
    /// 由 `search_start` 起逐日檢查 `horizon_days` 天，回傳第一個所有機台類型皆無短缺的日期
    ///
    /// 結果只取決於輸入；不讀取系統時間
    pub fn find_earliest<L>(
        requirements: &RequirementMap,
        lookup: &L,
        search_start: NaiveDate,
        horizon_days: u32,
    ) -> changeover_core::Result<DateSearchOutcome>
    where
        L: AvailabilityLookup + ?Sized,
    {
        Self::search(requirements, lookup, search_start, horizon_days, |_| true)
    }

    /// 同 `find_earliest`，但跳過工作日曆上的非工作日（搜尋範圍仍以日曆天計）
    pub fn find_earliest_on_calendar<L>(
        requirements: &RequirementMap,
        lookup: &L,
        search_start: NaiveDate,
        horizon_days: u32,
        calendar: &WorkCalendar,
    ) -> changeover_core::Result<DateSearchOutcome>
    where
        L: AvailabilityLookup + ?Sized,
    {
        Self::search(requirements, lookup, search_start, horizon_days, |date| {
            calendar.is_working_day(date)
        })
    }

    /// 檢查某日需求是否完全滿足
    pub fn is_feasible_on<L>(requirements: &RequirementMap, lookup: &L, date: NaiveDate) -> bool
    where
        L: AvailabilityLookup + ?Sized,
    {
        let availability = Self::availability_on(requirements, lookup, date);
        let results = FeasibilityCalculator::compute(requirements, &availability);
        FeasibilityCalculator::is_fully_feasible(&results)
    }

    /// 搜尋範圍內每日的短缺與風險
    pub fn timeline<L>(
        requirements: &RequirementMap,
        lookup: &L,
        search_start: NaiveDate,
        horizon_days: u32,
        policy: &RiskPolicy,
    ) -> changeover_core::Result<Vec<DailyFeasibility>>
    where
        L: AvailabilityLookup + ?Sized,
    {
        // 範圍末日超出日期上限時直接回報，不先配置整段時間軸
        Self::candidate_date(search_start, horizon_days.saturating_sub(1))?;

        let mut timeline = Vec::new();
        for offset in 0..horizon_days {
            let date = Self::candidate_date(search_start, offset)?;
            let availability = Self::availability_on(requirements, lookup, date);
            let results = FeasibilityCalculator::compute(requirements, &availability);
            let total_shortage = RiskClassifier::total_shortage(&results);

            timeline.push(DailyFeasibility {
                date,
                total_shortage,
                risk_level: policy.classify(total_shortage),
            });
        }
        Ok(timeline)
    }

    fn search<L, F>(
        requirements: &RequirementMap,
        lookup: &L,
        search_start: NaiveDate,
        horizon_days: u32,
        is_candidate: F,
    ) -> changeover_core::Result<DateSearchOutcome>
    where
        L: AvailabilityLookup + ?Sized,
        F: Fn(NaiveDate) -> bool,
    {
        tracing::debug!(
            "搜尋最早可行日期：起始 {}，範圍 {} 天，機台類型 {} 種",
            search_start,
            horizon_days,
            requirements.len()
        );

        for offset in 0..horizon_days {
            let date = Self::candidate_date(search_start, offset)?;
            if !is_candidate(date) {
                continue;
            }
            if Self::is_feasible_on(requirements, lookup, date) {
                tracing::debug!("最早可行日期: {}（第 {} 天）", date, offset);
                return Ok(DateSearchOutcome::Found {
                    date,
                    offset_days: offset,
                });
            }
        }

        tracing::debug!("{} 起 {} 天內無可行日期", search_start, horizon_days);
        Ok(DateSearchOutcome::NotFound {
            search_start,
            horizon_days,
        })
    }

    /// 只查詢有需求的機台類型；其餘類型盈餘必為非負，不影響可行性
    fn availability_on<L>(
        requirements: &RequirementMap,
        lookup: &L,
        date: NaiveDate,
    ) -> AvailabilityMap
    where
        L: AvailabilityLookup + ?Sized,
    {
        requirements
            .keys()
            .map(|machine_type| (machine_type.clone(), lookup.available_units(machine_type, date)))
            .collect()
    }

    fn candidate_date(search_start: NaiveDate, offset: u32) -> changeover_core::Result<NaiveDate> {
        search_start
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or_else(|| {
                CapacityError::InvalidDate(format!("{} 加 {} 天超出日期範圍", search_start, offset))
            })
    }
}
