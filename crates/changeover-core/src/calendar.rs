//! 工廠工作日曆

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// 工作日曆
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendar {
    /// 日曆ID
    pub calendar_id: String,

    /// 工作日（索引 0 = 週一, ..., 6 = 週日）
    pub working_days: [bool; 7],

    /// 節假日列表（已排序）
    pub holidays: Vec<NaiveDate>,
}

impl WorkCalendar {
    /// 創建新的工作日曆（預設週一到週六為工作日）
    pub fn new(calendar_id: impl Into<String>) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            working_days: [true, true, true, true, true, true, false],
            holidays: Vec::new(),
        }
    }

    /// 創建全年無休日曆
    pub fn new_24_7(calendar_id: impl Into<String>) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            working_days: [true; 7],
            holidays: Vec::new(),
        }
    }

    /// 建構器模式：設置工作日
    pub fn with_working_days(mut self, working_days: [bool; 7]) -> Self {
        self.working_days = working_days;
        self
    }

    /// 建構器模式：設置節假日
    pub fn with_holidays(mut self, mut holidays: Vec<NaiveDate>) -> Self {
        holidays.sort();
        holidays.dedup();
        self.holidays = holidays;
        self
    }

    /// 添加節假日
    pub fn add_holiday(&mut self, date: NaiveDate) {
        if let Err(pos) = self.holidays.binary_search(&date) {
            self.holidays.insert(pos, date);
        }
    }

    /// 檢查是否為工作日
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        if self.holidays.binary_search(&date).is_ok() {
            return false;
        }
        let weekday_index = date.weekday().num_days_from_monday() as usize;
        self.working_days[weekday_index]
    }

    /// 從排班資料建立日曆（多於 7 筆的工作日設定會被忽略）
    pub fn from_shift_data(
        calendar_id: impl Into<String>,
        working_days_vec: &[bool],
        holidays: Vec<NaiveDate>,
    ) -> Self {
        let mut working_days = [false; 7];
        for (slot, &is_working) in working_days.iter_mut().zip(working_days_vec) {
            *slot = is_working;
        }
        Self::new(calendar_id)
            .with_working_days(working_days)
            .with_holidays(holidays)
    }
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::new("DEFAULT")
    }
}
