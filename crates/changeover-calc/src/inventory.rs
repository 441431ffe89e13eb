//! 機台庫存提供者
//!
//! 引擎只讀取已解析好的資料；`FleetInventory` 是以記憶體中的機台、佔用與保養
//! 記錄推算可用量的確定性實作。

use changeover_core::{
    Assignment, AvailabilityMap, MachineAvailabilitySnapshot, MachineStatus, MachineUnit,
    MaintenanceWindow,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// 依（機台類型, 日期）查詢可用台數
pub trait AvailabilityLookup {
    fn available_units(&self, machine_type: &str, date: NaiveDate) -> u32;
}

impl<F> AvailabilityLookup for F
where
    F: Fn(&str, NaiveDate) -> u32,
{
    fn available_units(&self, machine_type: &str, date: NaiveDate) -> u32 {
        self(machine_type, date)
    }
}

/// 機台庫存提供者
pub trait InventoryProvider: AvailabilityLookup {
    /// 車隊中所有機台類型
    fn machine_types(&self) -> Vec<String>;

    /// 某日所有機台類型的可用台數
    fn snapshot(&self, date: NaiveDate) -> AvailabilityMap {
        self.machine_types()
            .into_iter()
            .map(|machine_type| {
                let units = self.available_units(&machine_type, date);
                (machine_type, units)
            })
            .collect()
    }
}

/// 佔用中機台（僅供顯示，不參與可行性計算）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    pub unit_id: String,
    pub style_code: String,
    pub line: String,
}

/// 各狀態台數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub available: u32,
    pub busy: u32,
    pub releasing: u32,
    pub maintenance: u32,
}

impl StatusCounts {
    /// 計入一台機台的狀態
    pub fn record(&mut self, status: &MachineStatus) {
        match status {
            MachineStatus::Available => self.available += 1,
            MachineStatus::Busy { .. } => self.busy += 1,
            MachineStatus::Releasing { .. } => self.releasing += 1,
            MachineStatus::Maintenance => self.maintenance += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.available + self.busy + self.releasing + self.maintenance
    }
}

/// 機台日曆格（產線 × 機台類型 × 日期）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub line: String,
    pub machine_type: String,
    pub date: NaiveDate,
    pub counts: StatusCounts,
}

/// 記憶體中的機台車隊
#[derive(Debug, Clone)]
pub struct FleetInventory {
    units: Vec<MachineUnit>,
    assignments: BTreeMap<String, Vec<Assignment>>,
    maintenance: BTreeMap<String, Vec<MaintenanceWindow>>,
    releasing_window_days: u32,
}

impl FleetInventory {
    /// 創建新的車隊
    pub fn new(units: Vec<MachineUnit>) -> Self {
        Self {
            units,
            assignments: BTreeMap::new(),
            maintenance: BTreeMap::new(),
            releasing_window_days: 7,
        }
    }

    /// 建構器模式：設置款式佔用
    pub fn with_assignments(mut self, assignments: Vec<Assignment>) -> Self {
        for assignment in assignments {
            self.add_assignment(assignment);
        }
        self
    }

    /// 建構器模式：設置保養期間
    pub fn with_maintenance(mut self, windows: Vec<MaintenanceWindow>) -> Self {
        for window in windows {
            self.add_maintenance(window);
        }
        self
    }

    /// 建構器模式：設置即將釋出範圍（天）
    pub fn with_releasing_window(mut self, days: u32) -> Self {
        self.releasing_window_days = days;
        self
    }

    /// 添加款式佔用
    pub fn add_assignment(&mut self, assignment: Assignment) {
        let list = self.assignments.entry(assignment.unit_id.clone()).or_default();
        list.push(assignment);
        list.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.style_code.cmp(&b.style_code)));
    }

    /// 添加保養期間
    pub fn add_maintenance(&mut self, window: MaintenanceWindow) {
        self.maintenance.entry(window.unit_id.clone()).or_default().push(window);
    }

    pub fn units(&self) -> &[MachineUnit] {
        &self.units
    }

    /// 某機台類型的總台數
    pub fn total_units(&self, machine_type: &str) -> u32 {
        self.units_of(machine_type).count() as u32
    }

    /// 機台在某日的狀態（保養優先於佔用）
    pub fn status_of(&self, unit: &MachineUnit, date: NaiveDate) -> MachineStatus {
        let in_maintenance = self
            .maintenance
            .get(&unit.id)
            .is_some_and(|windows| windows.iter().any(|w| w.covers(date)));
        if in_maintenance {
            return MachineStatus::Maintenance;
        }

        let assignment = self
            .assignments
            .get(&unit.id)
            .and_then(|list| list.iter().filter(|a| a.covers(date)).max_by_key(|a| a.end));

        match assignment {
            None => MachineStatus::Available,
            Some(a) if (a.end - date).num_days() <= i64::from(self.releasing_window_days) => {
                MachineStatus::Releasing {
                    style_code: a.style_code.clone(),
                    line: a.line.clone(),
                    release_date: a.end,
                }
            }
            Some(a) => MachineStatus::Busy {
                style_code: a.style_code.clone(),
                line: a.line.clone(),
            },
        }
    }

    /// 某日佔用某機台類型的款式與產線
    pub fn occupants(&self, machine_type: &str, date: NaiveDate) -> Vec<Occupancy> {
        self.units_of(machine_type)
            .filter_map(|unit| match self.status_of(unit, date) {
                MachineStatus::Busy { style_code, line }
                | MachineStatus::Releasing {
                    style_code, line, ..
                } => Some(Occupancy {
                    unit_id: unit.id.clone(),
                    style_code,
                    line,
                }),
                _ => None,
            })
            .collect()
    }

    /// 某機台類型某日的各狀態台數
    pub fn status_counts(&self, machine_type: &str, date: NaiveDate) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for unit in self.units_of(machine_type) {
            counts.record(&self.status_of(unit, date));
        }
        counts
    }

    /// 全車隊某日的各狀態台數
    pub fn fleet_counts(&self, date: NaiveDate) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for unit in &self.units {
            counts.record(&self.status_of(unit, date));
        }
        counts
    }

    /// 某日各機台類型的可用量快照
    pub fn availability_snapshots(&self, date: NaiveDate) -> Vec<MachineAvailabilitySnapshot> {
        self.snapshot(date)
            .into_iter()
            .map(|(machine_type, units)| {
                MachineAvailabilitySnapshot::new(machine_type, date, units)
            })
            .collect()
    }

    /// 機台日曆（依產線、機台類型、日期排序）
    pub fn calendar(&self, dates: &[NaiveDate]) -> Vec<CalendarCell> {
        let groups: BTreeSet<(&str, &str)> = self
            .units
            .iter()
            .map(|u| (u.line.as_str(), u.machine_type.trim()))
            .collect();

        let mut cells = Vec::with_capacity(groups.len() * dates.len());
        for (line, machine_type) in groups {
            for &date in dates {
                let mut counts = StatusCounts::default();
                for unit in self.units_of(machine_type).filter(|u| u.line == line) {
                    counts.record(&self.status_of(unit, date));
                }
                cells.push(CalendarCell {
                    line: line.to_string(),
                    machine_type: machine_type.to_string(),
                    date,
                    counts,
                });
            }
        }
        cells
    }

    /// 依機台類型篩選（忽略前後空白，與需求彙總一致）
    fn units_of<'a>(&'a self, machine_type: &'a str) -> impl Iterator<Item = &'a MachineUnit> + 'a {
        let machine_type = machine_type.trim();
        self.units
            .iter()
            .filter(move |u| u.machine_type.trim() == machine_type)
    }
}

impl AvailabilityLookup for FleetInventory {
    fn available_units(&self, machine_type: &str, date: NaiveDate) -> u32 {
        self.status_counts(machine_type, date).available
    }
}

impl InventoryProvider for FleetInventory {
    fn machine_types(&self) -> Vec<String> {
        let types: BTreeSet<&str> = self.units.iter().map(|u| u.machine_type.trim()).collect();
        types.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn sample_fleet() -> FleetInventory {
        FleetInventory::new(vec![
            MachineUnit::new("SN-001", "Single Needle", "Line 1"),
            MachineUnit::new("SN-002", "Single Needle", "Line 1"),
            MachineUnit::new("SN-003", "Single Needle", "Line 2"),
            MachineUnit::new("FL-001", "Flatlock", "Line 2"),
        ])
        .with_assignments(vec![
            Assignment::new("SN-001", "ST-6291", "Line 1", date(1), date(28)),
            Assignment::new("SN-003", "ST-7842", "Line 2", date(1), date(12)),
        ])
        .with_maintenance(vec![MaintenanceWindow::new("FL-001", date(10), date(11))])
    }

    #[test]
    fn test_status_precedence() {
        let fleet = sample_fleet();
        let units = fleet.units().to_vec();

        // 01-10 距 01-28 還有 18 天 → Busy
        assert!(matches!(
            fleet.status_of(&units[0], date(10)),
            MachineStatus::Busy { .. }
        ));
        // 01-10 距 01-12 只有 2 天 → Releasing
        assert!(matches!(
            fleet.status_of(&units[2], date(10)),
            MachineStatus::Releasing { release_date, .. } if release_date == date(12)
        ));
        assert_eq!(fleet.status_of(&units[1], date(10)), MachineStatus::Available);
        assert_eq!(fleet.status_of(&units[3], date(10)), MachineStatus::Maintenance);
        assert_eq!(fleet.status_of(&units[3], date(12)), MachineStatus::Available);
    }

    #[test]
    fn test_available_units_never_exceed_total() {
        let fleet = sample_fleet();

        for day in 1..=31 {
            for machine_type in fleet.machine_types() {
                let available = fleet.available_units(&machine_type, date(day));
                assert!(available <= fleet.total_units(&machine_type));
            }
        }
        assert_eq!(fleet.available_units("Single Needle", date(10)), 1);
        assert_eq!(fleet.available_units("Single Needle", date(13)), 2);
        assert_eq!(fleet.available_units("Overlock 5T", date(13)), 0);
    }

    #[test]
    fn test_snapshot_covers_all_types() {
        let snapshot = sample_fleet().snapshot(date(10));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["Single Needle"], 1);
        assert_eq!(snapshot["Flatlock"], 0);
    }

    #[test]
    fn test_availability_snapshots() {
        let snapshots = sample_fleet().availability_snapshots(date(13));

        assert_eq!(
            snapshots,
            vec![
                MachineAvailabilitySnapshot::new("Flatlock", date(13), 1),
                MachineAvailabilitySnapshot::new("Single Needle", date(13), 2),
            ]
        );
    }

    #[test]
    fn test_occupants_for_display() {
        let occupants = sample_fleet().occupants("Single Needle", date(10));

        assert_eq!(occupants.len(), 2);
        assert_eq!(occupants[0].unit_id, "SN-001");
        assert_eq!(occupants[0].style_code, "ST-6291");
        assert_eq!(occupants[1].line, "Line 2");
    }

    #[test]
    fn test_fleet_counts_and_calendar() {
        let fleet = sample_fleet();
        let counts = fleet.fleet_counts(date(10));

        assert_eq!(
            counts,
            StatusCounts {
                available: 1,
                busy: 1,
                releasing: 1,
                maintenance: 1,
            }
        );
        assert_eq!(counts.total(), 4);

        let cells = fleet.calendar(&[date(10), date(11)]);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0].line, "Line 1");
        assert_eq!(cells[0].machine_type, "Single Needle");
        assert_eq!(cells[0].counts.busy, 1);
        assert_eq!(cells[0].counts.available, 1);
        assert_eq!(cells[2].line, "Line 2");
        assert_eq!(cells[2].machine_type, "Flatlock");
        assert_eq!(cells[2].counts.maintenance, 1);
        assert_eq!(cells[5].machine_type, "Single Needle");
        assert_eq!(cells[5].counts.releasing, 1);
    }

    #[test]
    fn test_machine_type_is_trimmed() {
        let fleet = FleetInventory::new(vec![
            MachineUnit::new("SN-001", "Single Needle ", "Line 1"),
            MachineUnit::new("SN-002", "Single Needle", "Line 1"),
        ]);

        assert_eq!(fleet.machine_types(), vec!["Single Needle".to_string()]);
        assert_eq!(fleet.available_units("Single Needle", date(10)), 2);
        assert_eq!(fleet.total_units(" Single Needle"), 2);
    }

    #[test]
    fn test_overlapping_assignments_use_latest_release() {
        let unit = MachineUnit::new("SN-001", "Single Needle", "Line 1");
        let fleet = FleetInventory::new(vec![unit.clone()]).with_assignments(vec![
            Assignment::new("SN-001", "ST-6291", "Line 1", date(1), date(12)),
            Assignment::new("SN-001", "ST-7842", "Line 1", date(8), date(28)),
        ]);

        // 01-10 兩筆佔用重疊，以 01-28 結束者為準 → Busy
        assert_eq!(
            fleet.status_of(&unit, date(10)),
            MachineStatus::Busy {
                style_code: "ST-7842".to_string(),
                line: "Line 1".to_string(),
            }
        );
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |machine_type: &str, _date: NaiveDate| -> u32 {
            if machine_type == "Bartack" { 3 } else { 0 }
        };

        assert_eq!(lookup.available_units("Bartack", date(1)), 3);
        assert_eq!(lookup.available_units("Flatlock", date(1)), 0);
    }
}
