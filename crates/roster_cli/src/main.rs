//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `roster_core` linkage by running a fixed booking scenario.
//! - Print the resulting weekly grid as plain text.
//!
//! Logging is enabled when `ROSTER_LOG_DIR` is set; `ROSTER_LOG_LEVEL`
//! overrides the build default.

use roster_core::{
    default_log_level, init_logging, weekly_grid, Day, InMemoryScheduleRepository, ScheduleError,
    ScheduleService,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("ROSTER_LOG_DIR") {
        let level = std::env::var("ROSTER_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run_scenario() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scenario failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_scenario() -> Result<(), ScheduleError> {
    println!("roster_core version={}", roster_core::core_version());

    let mut service = ScheduleService::new(InMemoryScheduleRepository::new());
    let alice = service.add_driver("Alice")?;
    service.add_driver("Bob")?;
    let north = service.add_route("North Loop")?;
    let harbor = service.add_route("Harbor Express")?;

    service.assign(north.id, alice.id, Some(Day::Mon))?;
    match service.assign(harbor.id, alice.id, Some(Day::Mon)) {
        Err(err @ ScheduleError::DoubleBooking { .. }) => println!("rejected: {err}"),
        Err(other) => return Err(other),
        Ok(_) => return Err(ScheduleError::InconsistentState("double booking accepted")),
    }
    service.assign(harbor.id, alice.id, Some(Day::Tue))?;

    let grid = weekly_grid(service.repo());
    let header: Vec<&str> = Day::ALL.iter().map(|day| day.as_str()).collect();
    println!("{:<12} {}", "Driver", header.join(" | "));
    for row in &grid.rows {
        let cells: Vec<String> = row.cells.iter().map(|cell| cell.label()).collect();
        println!("{:<12} {}", row.driver.name, cells.join(" | "));
    }
    log::logger().flush();
    Ok(())
}
