//! 機台需求、可用量與可行性結果

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 單一機台類型的需求台數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineTypeRequirement {
    /// 機台類型
    pub machine_type: String,

    /// 同時需要的台數
    pub required_units: u32,
}

impl MachineTypeRequirement {
    pub fn new(machine_type: impl Into<String>, required_units: u32) -> Self {
        Self {
            machine_type: machine_type.into(),
            required_units,
        }
    }
}

/// 某日某機台類型的可用台數
///
/// `available_units` 不超過該類型總台數，由庫存提供者保證
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineAvailabilitySnapshot {
    /// 機台類型
    pub machine_type: String,

    /// 日期
    pub date: NaiveDate,

    /// 可用台數（未被其他款式佔用、非保養中）
    pub available_units: u32,
}

impl MachineAvailabilitySnapshot {
    pub fn new(machine_type: impl Into<String>, date: NaiveDate, available_units: u32) -> Self {
        Self {
            machine_type: machine_type.into(),
            date,
            available_units,
        }
    }
}

/// 單一機台類型的可行性結果
///
/// 欄位唯讀：`surplus` 只在建構時由 `available - required` 算出
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FeasibilityResult {
    machine_type: String,
    required: u32,
    available: u32,
    surplus: i64,
}

impl FeasibilityResult {
    /// 創建新的可行性結果
    pub fn new(machine_type: impl Into<String>, required: u32, available: u32) -> Self {
        Self {
            machine_type: machine_type.into(),
            required,
            available,
            surplus: i64::from(available) - i64::from(required),
        }
    }

    pub fn machine_type(&self) -> &str {
        &self.machine_type
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    /// 盈餘（負數為短缺）
    pub fn surplus(&self) -> i64 {
        self.surplus
    }

    /// 短缺台數（無短缺時為 0）
    pub fn shortage_units(&self) -> u64 {
        if self.surplus < 0 {
            self.surplus.unsigned_abs()
        } else {
            0
        }
    }

    /// 多餘台數（無盈餘時為 0）
    pub fn surplus_units(&self) -> u64 {
        if self.surplus > 0 {
            self.surplus.unsigned_abs()
        } else {
            0
        }
    }

    /// 檢查是否有短缺
    pub fn is_short(&self) -> bool {
        self.surplus < 0
    }
}
