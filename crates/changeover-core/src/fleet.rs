//! 機台車隊模型：機台、款式佔用與保養

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 單一實體機台
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineUnit {
    /// 機台編號（如 SN-001）
    pub id: String,

    /// 機台類型
    pub machine_type: String,

    /// 所屬產線
    pub line: String,
}

impl MachineUnit {
    pub fn new(
        id: impl Into<String>,
        machine_type: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            machine_type: machine_type.into(),
            line: line.into(),
        }
    }
}

/// 款式佔用（起訖日皆含）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub unit_id: String,
    pub style_code: String,
    pub line: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Assignment {
    pub fn new(
        unit_id: impl Into<String>,
        style_code: impl Into<String>,
        line: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            unit_id: unit_id.into(),
            style_code: style_code.into(),
            line: line.into(),
            start,
            end,
        }
    }

    /// 檢查日期是否在佔用期間內
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// 保養期間（起訖日皆含）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    pub unit_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MaintenanceWindow {
    pub fn new(unit_id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            unit_id: unit_id.into(),
            start,
            end,
        }
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// 機台在某日的狀態
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MachineStatus {
    /// 可分配
    Available,
    /// 被其他款式佔用
    Busy { style_code: String, line: String },
    /// 佔用中，但將於近期釋出
    Releasing {
        style_code: String,
        line: String,
        release_date: NaiveDate,
    },
    /// 保養中
    Maintenance,
}

impl MachineStatus {
    /// 是否可計入可用台數
    pub fn is_available(&self) -> bool {
        matches!(self, MachineStatus::Available)
    }

    /// 是否被款式佔用（含即將釋出）
    pub fn is_occupied(&self) -> bool {
        matches!(
            self,
            MachineStatus::Busy { .. } | MachineStatus::Releasing { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_covers_inclusive_range() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap();
        let assignment = Assignment::new("SN-001", "ST-6291", "Line 1", start, end);

        assert!(assignment.covers(start));
        assert!(assignment.covers(end));
        assert!(!assignment.covers(end.succ_opt().unwrap()));
        assert!(!assignment.covers(start.pred_opt().unwrap()));
    }

    #[test]
    fn test_status_flags() {
        assert!(MachineStatus::Available.is_available());
        assert!(!MachineStatus::Maintenance.is_available());
        assert!(!MachineStatus::Maintenance.is_occupied());

        let busy = MachineStatus::Busy {
            style_code: "ST-7842".to_string(),
            line: "Line 3".to_string(),
        };
        assert!(busy.is_occupied());
        assert!(!busy.is_available());
    }

    #[test]
    fn test_status_serializes_with_tag() {
        let json = serde_json::to_value(MachineStatus::Available).unwrap();
        assert_eq!(json["status"], "available");
    }
}
