//! 換款模擬示例

use changeover::{
    logging, Assignment, ChangeoverSimulator, DashboardSummary, DateSearch, FeasibilityConfig,
    FleetInventory, InventoryProvider, MachineUnit, MaintenanceWindow, OperationRecord,
    SimulationRequest, StyleCatalog, StyleIntake,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    logging::init();

    let day = |d: u32| NaiveDate::from_ymd_opt(2025, 1, d).ok_or_else(|| anyhow::anyhow!("無效日期"));

    let config = FeasibilityConfig::new().with_search_horizon(14);

    // 車隊：兩條線
    let fleet = FleetInventory::new(vec![
        MachineUnit::new("SN-001", "Single Needle", "Line 1"),
        MachineUnit::new("SN-002", "Single Needle", "Line 1"),
        MachineUnit::new("SN-003", "Single Needle", "Line 2"),
        MachineUnit::new("OL-001", "Overlock 5T", "Line 1"),
        MachineUnit::new("FL-001", "Flatlock", "Line 2"),
        MachineUnit::new("BT-001", "Bartack", "Line 2"),
    ])
    .with_assignments(vec![
        Assignment::new("SN-001", "ST-6291", "Line 1", day(1)?, day(20)?),
        Assignment::new("FL-001", "ST-7842", "Line 2", day(1)?, day(17)?),
    ])
    .with_maintenance(vec![MaintenanceWindow::new("BT-001", day(15)?, day(16)?)])
    .with_releasing_window(config.releasing_window_days);

    // 款式建檔
    let intake = StyleIntake::new("ST-8542", 1200)
        .with_planned_start_date(day(15)?)
        .with_operations(vec![
            OperationRecord::new("Collar Attach", "Single Needle", Decimal::new(125, 2), 2),
            OperationRecord::new("Side Seam", "Overlock 5T", Decimal::new(85, 2), 1),
            OperationRecord::new("Hem Bottom", "Flatlock", Decimal::new(65, 2), 1),
            OperationRecord::new("Bartack", "Bartack", Decimal::new(35, 2), 1),
        ]);

    let mut catalog = StyleCatalog::new();
    let summary = catalog.register(&intake)?;
    println!(
        "款式 {}：工序 {} 筆，總 SMV {}，機台類型 {:?}",
        summary.style_code, summary.operation_count, summary.total_smv, summary.machine_types
    );

    // 模擬
    let simulator = ChangeoverSimulator::new(config.clone());
    let request = SimulationRequest::new("Line 2", "ST-8542", day(15)?);
    let report = simulator.simulate_style(&request, &catalog, &fleet)?;

    println!("\n風險: {}", report.plan.risk_level());
    for result in report.plan.results() {
        println!(
            "  {:<15} 需求 {:>2}  可用 {:>2}  {:+}",
            result.machine_type(),
            result.required(),
            result.available(),
            result.surplus()
        );
    }
    match report.suggested_date.date() {
        Some(date) => println!("建議日期: {}", date),
        None => println!("{} 天內無可行日期", config.search_horizon_days),
    }

    // 機台日曆
    let timeline = DateSearch::timeline(
        &summary.requirements,
        &fleet,
        day(15)?,
        7,
        &config.risk_policy,
    )?;
    println!("\n每日短缺:");
    for entry in &timeline {
        println!("  {}  短缺 {}  {}", entry.date, entry.total_shortage, entry.risk_level);
    }

    let dashboard = DashboardSummary::build(fleet.fleet_counts(day(15)?), &[report.plan.clone()]);
    println!(
        "\n可用 {} / 佔用 {} / 即將釋出 {} / 保養 {}，需關注換款 {}",
        dashboard.fleet.available,
        dashboard.fleet.busy,
        dashboard.fleet.releasing,
        dashboard.fleet.maintenance,
        dashboard.risky_changeovers
    );
    println!("機台類型: {:?}", fleet.machine_types());

    println!("\n{}", report.to_json_pretty()?);
    tracing::info!("示例完成");

    Ok(())
}
