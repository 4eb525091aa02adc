//! Read-only projections over a schedule repository.
//!
//! # Responsibility
//! - Derive weekly grid, availability, roster and summary views.
//! - Apply case-insensitive name filtering.
//!
//! # Invariants
//! - Projections never mutate the repository.
//! - Aggregate views tolerate more than one route per driver/day and skip
//!   assignments whose driver no longer exists.
//! - Strict lookups (`route_roster`) surface missing entities as errors.

use crate::model::day::Day;
use crate::model::driver::{Driver, DriverId};
use crate::model::route::{Route, RouteId};
use crate::model::Named;
use crate::repo::schedule_repo::ScheduleRepository;
use log::warn;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type QueryResult<T> = Result<T, QueryError>;

/// Lookup failures raised by strict projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    DriverNotFound(DriverId),
    RouteNotFound(RouteId),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DriverNotFound(id) => write!(f, "driver not found: {id}"),
            Self::RouteNotFound(id) => write!(f, "route not found: {id}"),
        }
    }
}

impl Error for QueryError {}

/// One driver/day cell of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub day: Day,
    /// Names of routes booking the driver that day, in route order.
    pub route_names: Vec<String>,
}

impl GridCell {
    pub fn is_free(&self) -> bool {
        self.route_names.is_empty()
    }

    /// `"Free"`, or the booked route names joined by `", "`.
    pub fn label(&self) -> String {
        if self.is_free() {
            "Free".to_string()
        } else {
            self.route_names.join(", ")
        }
    }
}

/// One driver row of the weekly grid, with a cell per day in week order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub driver: Driver,
    pub cells: Vec<GridCell>,
}

impl GridRow {
    pub fn cell(&self, day: Day) -> Option<&GridCell> {
        self.cells.get(day.index())
    }
}

/// Driver-by-day view of every booking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeeklyGrid {
    pub rows: Vec<GridRow>,
}

impl WeeklyGrid {
    pub fn row(&self, driver_id: DriverId) -> Option<&GridRow> {
        self.rows.iter().find(|row| row.driver.id == driver_id)
    }

    /// Route names booked for the driver on `day`; `None` when the driver is
    /// free or not in the grid.
    pub fn routes_for(&self, driver_id: DriverId, day: Day) -> Option<&[String]> {
        self.row(driver_id)
            .and_then(|row| row.cell(day))
            .filter(|cell| !cell.is_free())
            .map(|cell| cell.route_names.as_slice())
    }
}

/// Driver resolved from one route assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub driver: Driver,
    pub day: Day,
}

/// Days a driver is booked on, across all routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSummary {
    pub driver: Driver,
    /// Booked days in route order, then assignment order.
    pub days: Vec<Day>,
}

impl DriverSummary {
    pub fn is_available(&self) -> bool {
        self.days.is_empty()
    }

    /// `"Available"`, or the booked days joined by `", "`.
    pub fn label(&self) -> String {
        if self.is_available() {
            return "Available".to_string();
        }
        self.days
            .iter()
            .map(|day| day.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Route with its assignment count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub route: Route,
    pub assignment_count: usize,
}

impl RouteSummary {
    pub fn is_unassigned(&self) -> bool {
        self.assignment_count == 0
    }
}

/// Filters `items` by case-insensitive substring match on name.
///
/// An empty query keeps every item in its original order.
pub fn filter_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name().to_lowercase().contains(needle.as_str()))
        .collect()
}

/// Builds the driver-by-day grid in driver insertion order.
pub fn weekly_grid<R: ScheduleRepository>(repo: &R) -> WeeklyGrid {
    let routes = repo.list_routes();
    let rows = repo
        .list_drivers()
        .into_iter()
        .map(|driver| {
            let cells = Day::ALL
                .into_iter()
                .map(|day| GridCell {
                    day,
                    route_names: routes
                        .iter()
                        .filter(|route| route.has_assignment(driver.id, day))
                        .map(|route| route.name.clone())
                        .collect(),
                })
                .collect();
            GridRow { driver, cells }
        })
        .collect();
    WeeklyGrid { rows }
}

/// Drivers with no assignment on `day`, optionally narrowed by name.
pub fn available_drivers<R: ScheduleRepository>(
    repo: &R,
    day: Day,
    name_filter: Option<&str>,
) -> Vec<Driver> {
    let booked = booked_driver_ids(&repo.list_routes(), day);
    let drivers = repo.list_drivers();
    filter_by_name(&drivers, name_filter.unwrap_or(""))
        .into_iter()
        .filter(|driver| !booked.contains(&driver.id))
        .cloned()
        .collect()
}

/// Drivers offered when assigning on a route.
///
/// Without a selected day every driver is offered; the assign command itself
/// rejects the missing day.
pub fn assignable_drivers<R: ScheduleRepository>(repo: &R, day: Option<Day>) -> Vec<Driver> {
    match day {
        Some(day) => available_drivers(repo, day, None),
        None => repo.list_drivers(),
    }
}

/// Resolves each assignment of a route to its driver, in insertion order.
///
/// # Errors
/// - `RouteNotFound` when `route_id` is unknown.
/// - `DriverNotFound` when an assignment references a missing driver. Unlike
///   the aggregate views, a roster never hides a dangling entry.
pub fn route_roster<R: ScheduleRepository>(
    repo: &R,
    route_id: RouteId,
) -> QueryResult<Vec<RosterEntry>> {
    let route = repo
        .get_route(route_id)
        .ok_or(QueryError::RouteNotFound(route_id))?;
    route
        .assignments
        .iter()
        .map(|assignment| {
            let driver = repo
                .get_driver(assignment.driver_id)
                .ok_or(QueryError::DriverNotFound(assignment.driver_id))?;
            Ok(RosterEntry {
                driver,
                day: assignment.day,
            })
        })
        .collect()
}

/// Per-driver booked days, narrowed by an optional name filter.
pub fn driver_summaries<R: ScheduleRepository>(
    repo: &R,
    name_filter: Option<&str>,
) -> Vec<DriverSummary> {
    let routes = repo.list_routes();
    let drivers = repo.list_drivers();
    filter_by_name(&drivers, name_filter.unwrap_or(""))
        .into_iter()
        .map(|driver| DriverSummary {
            driver: driver.clone(),
            days: routes
                .iter()
                .flat_map(|route| route.assignments.iter())
                .filter(|assignment| assignment.driver_id == driver.id)
                .map(|assignment| assignment.day)
                .collect(),
        })
        .collect()
}

/// Per-route assignment counts, narrowed by an optional name filter.
///
/// Assignments pointing at a missing driver are not counted.
pub fn route_summaries<R: ScheduleRepository>(
    repo: &R,
    name_filter: Option<&str>,
) -> Vec<RouteSummary> {
    let known: HashSet<DriverId> = repo.list_drivers().iter().map(|driver| driver.id).collect();
    let routes = repo.list_routes();
    filter_by_name(&routes, name_filter.unwrap_or(""))
        .into_iter()
        .map(|route| {
            let assignment_count = route
                .assignments
                .iter()
                .filter(|assignment| {
                    let resolved = known.contains(&assignment.driver_id);
                    if !resolved {
                        warn!(
                            "event=dangling_assignment module=query status=skipped route={} driver={}",
                            route.id, assignment.driver_id
                        );
                    }
                    resolved
                })
                .count();
            RouteSummary {
                route: route.clone(),
                assignment_count,
            }
        })
        .collect()
}

fn booked_driver_ids(routes: &[Route], day: Day) -> HashSet<DriverId> {
    routes
        .iter()
        .flat_map(|route| route.assignments.iter())
        .filter(|assignment| assignment.day == day)
        .map(|assignment| assignment.driver_id)
        .collect()
}
