//! Core domain logic for the weekly driver roster.
//! This crate is the single source of truth for the one-route-per-day rule.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::day::{parse_day, parse_day_selection, Day, DayParseError};
pub use model::driver::{Driver, DriverId};
pub use model::route::{Assignment, Route, RouteId};
pub use model::{EntityValidationError, Named};
pub use query::projection::{
    assignable_drivers, available_drivers, driver_summaries, filter_by_name, route_roster,
    route_summaries, weekly_grid, DriverSummary, GridCell, GridRow, QueryError, QueryResult,
    RosterEntry, RouteSummary, WeeklyGrid,
};
pub use repo::schedule_repo::{
    InMemoryScheduleRepository, RepoError, RepoResult, ScheduleRepository,
};
pub use service::schedule_service::{ScheduleError, ScheduleResult, ScheduleService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
