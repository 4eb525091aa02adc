//! Schedule use-case service.
//!
//! # Responsibility
//! - Be the single authority that creates and removes assignments.
//! - Expose driver/route creation through the same command surface.
//!
//! # Invariants
//! - A driver holds at most one assignment per day across all routes, after
//!   every command.
//! - A rejected command leaves the repository unchanged.
//! - `assign` validates in order: day selected, route exists, driver exists,
//!   driver free on that day.

use crate::model::day::Day;
use crate::model::driver::{Driver, DriverId};
use crate::model::route::{Assignment, Route, RouteId};
use crate::model::EntityValidationError;
use crate::repo::schedule_repo::{RepoError, ScheduleRepository};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors returned by schedule commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Name input is blank.
    Validation(EntityValidationError),
    /// Assignment attempted without selecting a day.
    MissingDay,
    /// Driver already holds an assignment on that day.
    DoubleBooking {
        driver_id: DriverId,
        day: Day,
        /// Route currently holding the booking.
        route_id: RouteId,
    },
    DriverNotFound(DriverId),
    RouteNotFound(RouteId),
    /// Non-lookup repository failure.
    Repo(RepoError),
    /// Write succeeded but read-back disagrees.
    InconsistentState(&'static str),
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::MissingDay => write!(f, "select a day before assigning a driver"),
            Self::DoubleBooking {
                driver_id,
                day,
                route_id,
            } => write!(
                f,
                "driver {driver_id} is already assigned on {day} (route {route_id})"
            ),
            Self::DriverNotFound(id) => write!(f, "driver not found: {id}"),
            Self::RouteNotFound(id) => write!(f, "route not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent schedule state: {details}")
            }
        }
    }
}

impl Error for ScheduleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EntityValidationError> for ScheduleError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ScheduleError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::DriverNotFound(id) => Self::DriverNotFound(id),
            RepoError::RouteNotFound(id) => Self::RouteNotFound(id),
            RepoError::AlreadyBooked {
                driver_id,
                day,
                route_id,
            } => Self::DoubleBooking {
                driver_id,
                day,
                route_id,
            },
            other => Self::Repo(other),
        }
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Command facade over a schedule repository.
pub struct ScheduleService<R: ScheduleRepository> {
    repo: R,
}

impl<R: ScheduleRepository> ScheduleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access for the query layer.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Consumes the service and returns the repository.
    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Adds a driver with a generated id and trimmed name.
    pub fn add_driver(&mut self, name: &str) -> ScheduleResult<Driver> {
        let driver = Driver::new(name).inspect_err(|_| {
            warn!("event=driver_add module=schedule status=rejected reason=blank_name");
        })?;
        let driver = self.repo.insert_driver(driver)?;
        info!(
            "event=driver_add module=schedule status=ok driver={}",
            driver.id
        );
        Ok(driver)
    }

    /// Adds a route with a generated id, trimmed name and no assignments.
    pub fn add_route(&mut self, name: &str) -> ScheduleResult<Route> {
        let route = Route::new(name).inspect_err(|_| {
            warn!("event=route_add module=schedule status=rejected reason=blank_name");
        })?;
        let route = self.repo.insert_route(route)?;
        info!("event=route_add module=schedule status=ok route={}", route.id);
        Ok(route)
    }

    pub fn get_drivers(&self) -> Vec<Driver> {
        self.repo.list_drivers()
    }

    pub fn get_routes(&self) -> Vec<Route> {
        self.repo.list_routes()
    }

    /// Returns whether the driver holds any assignment on `day`.
    ///
    /// # Errors
    /// - `DriverNotFound` for unknown drivers; they are never reported free.
    pub fn is_driver_busy(&self, driver_id: DriverId, day: Day) -> ScheduleResult<bool> {
        Ok(self.booking_for(driver_id, day)?.is_some())
    }

    /// Returns the route booking the driver on `day`, or `None` when free.
    pub fn booking_for(&self, driver_id: DriverId, day: Day) -> ScheduleResult<Option<RouteId>> {
        self.ensure_driver_exists(driver_id)?;
        Ok(self.repo.find_booking(driver_id, day))
    }

    /// Books `driver_id` on `route_id` for `day` and returns the updated route.
    ///
    /// # Invariants
    /// - On any error the repository is left unchanged.
    /// - A repeated identical call is rejected as `DoubleBooking`, like any
    ///   other conflicting booking.
    ///
    /// # Errors
    /// - `MissingDay` when `day` is `None`, checked before anything else.
    /// - `RouteNotFound` / `DriverNotFound` for unknown references.
    /// - `DoubleBooking` naming the route that already holds the day.
    pub fn assign(
        &mut self,
        route_id: RouteId,
        driver_id: DriverId,
        day: Option<Day>,
    ) -> ScheduleResult<Route> {
        let result = self.try_assign(route_id, driver_id, day);
        match &result {
            Ok(_) => info!(
                "event=assignment_create module=schedule status=ok route={} driver={} day={}",
                route_id,
                driver_id,
                day.map_or("none", Day::as_str)
            ),
            Err(err) => warn!(
                "event=assignment_create module=schedule status=rejected route={} driver={} day={} reason={}",
                route_id,
                driver_id,
                day.map_or("none", Day::as_str),
                rejection_reason(err)
            ),
        }
        result
    }

    /// Removes the booking of `driver_id` on `route_id` for `day` and returns
    /// the updated route.
    ///
    /// # Invariants
    /// - Removing an assignment that does not exist (including one for an
    ///   unknown driver) succeeds without change.
    /// - A booking held by another route is never touched.
    ///
    /// # Errors
    /// - `RouteNotFound` for unknown routes.
    pub fn unassign(
        &mut self,
        route_id: RouteId,
        driver_id: DriverId,
        day: Day,
    ) -> ScheduleResult<Route> {
        let removed = self
            .repo
            .remove_assignment(route_id, Assignment::new(driver_id, day))?;
        if removed == 0 {
            debug!(
                "event=assignment_remove module=schedule status=noop route={} driver={} day={}",
                route_id, driver_id, day
            );
        } else {
            info!(
                "event=assignment_remove module=schedule status=ok route={} driver={} day={}",
                route_id, driver_id, day
            );
        }
        self.read_back_route(route_id, "route missing after unassign")
    }

    fn try_assign(
        &mut self,
        route_id: RouteId,
        driver_id: DriverId,
        day: Option<Day>,
    ) -> ScheduleResult<Route> {
        let day = day.ok_or(ScheduleError::MissingDay)?;
        if self.repo.get_route(route_id).is_none() {
            return Err(ScheduleError::RouteNotFound(route_id));
        }
        // Why: `booking_for` fails on unknown drivers, so a missing driver is
        // reported as `DriverNotFound` instead of passing the busy check as free.
        if let Some(booked_route) = self.booking_for(driver_id, day)? {
            return Err(ScheduleError::DoubleBooking {
                driver_id,
                day,
                route_id: booked_route,
            });
        }

        self.repo
            .append_assignment(route_id, Assignment::new(driver_id, day))?;
        self.read_back_route(route_id, "route missing after assign")
    }

    fn ensure_driver_exists(&self, driver_id: DriverId) -> ScheduleResult<()> {
        self.repo
            .get_driver(driver_id)
            .map(|_| ())
            .ok_or(ScheduleError::DriverNotFound(driver_id))
    }

    fn read_back_route(&self, route_id: RouteId, details: &'static str) -> ScheduleResult<Route> {
        self.repo
            .get_route(route_id)
            .ok_or(ScheduleError::InconsistentState(details))
    }
}

fn rejection_reason(err: &ScheduleError) -> &'static str {
    match err {
        ScheduleError::Validation(_) => "validation",
        ScheduleError::MissingDay => "missing_day",
        ScheduleError::DoubleBooking { .. } => "double_booking",
        ScheduleError::DriverNotFound(_) => "driver_not_found",
        ScheduleError::RouteNotFound(_) => "route_not_found",
        ScheduleError::Repo(_) => "repo",
        ScheduleError::InconsistentState(_) => "inconsistent_state",
    }
}
