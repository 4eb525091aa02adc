//! Schedule repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Hold the canonical driver and route collections.
//! - Provide low-level reads and writes for the service layer.
//!
//! # Invariants
//! - Write paths call entity `validate()` before mutating.
//! - Collections keep insertion order.
//! - New routes are stored with an empty assignment list.
//! - `append_assignment` refuses a second booking of the same driver and day
//!   on any route, so the one-booking-per-day rule holds even for callers
//!   that bypass `ScheduleService`.

use crate::model::day::Day;
use crate::model::driver::{Driver, DriverId};
use crate::model::route::{Assignment, Route, RouteId};
use crate::model::EntityValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity writes and referenced lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(EntityValidationError),
    DriverNotFound(DriverId),
    RouteNotFound(RouteId),
    /// An entity with the same id is already stored.
    DuplicateId(Uuid),
    /// Driver is already booked on `day` by `route_id`.
    AlreadyBooked {
        driver_id: DriverId,
        day: Day,
        route_id: RouteId,
    },
    /// Entity shape cannot be stored as-is.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DriverNotFound(id) => write!(f, "driver not found: {id}"),
            Self::RouteNotFound(id) => write!(f, "route not found: {id}"),
            Self::DuplicateId(id) => write!(f, "entity id already exists: {id}"),
            Self::AlreadyBooked {
                driver_id,
                day,
                route_id,
            } => write!(
                f,
                "driver {driver_id} already booked on {day} by route {route_id}"
            ),
            Self::InvalidData(message) => write!(f, "invalid route data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EntityValidationError> for RepoError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage interface for drivers, routes and their assignments.
pub trait ScheduleRepository {
    fn insert_driver(&mut self, driver: Driver) -> RepoResult<Driver>;
    /// Stores a new route.
    ///
    /// # Errors
    /// - `InvalidData` when the route already carries assignments.
    fn insert_route(&mut self, route: Route) -> RepoResult<Route>;
    fn get_driver(&self, id: DriverId) -> Option<Driver>;
    fn get_route(&self, id: RouteId) -> Option<Route>;
    fn list_drivers(&self) -> Vec<Driver>;
    fn list_routes(&self) -> Vec<Route>;
    /// Returns the first route booking `driver_id` on `day`, if any.
    fn find_booking(&self, driver_id: DriverId, day: Day) -> Option<RouteId>;
    /// Appends one booking to a route.
    ///
    /// # Errors
    /// - `DriverNotFound` / `RouteNotFound` for unknown references.
    /// - `AlreadyBooked` when the driver already holds that day anywhere.
    fn append_assignment(&mut self, route_id: RouteId, assignment: Assignment) -> RepoResult<()>;
    /// Removes every matching assignment from the route and returns how many
    /// were removed.
    fn remove_assignment(&mut self, route_id: RouteId, assignment: Assignment)
        -> RepoResult<usize>;
}

/// Process-local repository backed by insertion-ordered vectors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleRepository {
    drivers: Vec<Driver>,
    routes: Vec<Route>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn contains_id(&self, id: Uuid) -> bool {
        self.drivers.iter().any(|driver| driver.id == id)
            || self.routes.iter().any(|route| route.id == id)
    }

    fn route_mut(&mut self, route_id: RouteId) -> RepoResult<&mut Route> {
        self.routes
            .iter_mut()
            .find(|route| route.id == route_id)
            .ok_or(RepoError::RouteNotFound(route_id))
    }
}

impl ScheduleRepository for InMemoryScheduleRepository {
    fn insert_driver(&mut self, driver: Driver) -> RepoResult<Driver> {
        driver.validate()?;
        if self.contains_id(driver.id) {
            return Err(RepoError::DuplicateId(driver.id));
        }
        self.drivers.push(driver.clone());
        Ok(driver)
    }

    fn insert_route(&mut self, route: Route) -> RepoResult<Route> {
        route.validate()?;
        if !route.is_unassigned() {
            return Err(RepoError::InvalidData(format!(
                "route {} must be created without assignments",
                route.id
            )));
        }
        if self.contains_id(route.id) {
            return Err(RepoError::DuplicateId(route.id));
        }
        self.routes.push(route.clone());
        Ok(route)
    }

    fn get_driver(&self, id: DriverId) -> Option<Driver> {
        self.drivers.iter().find(|driver| driver.id == id).cloned()
    }

    fn get_route(&self, id: RouteId) -> Option<Route> {
        self.routes.iter().find(|route| route.id == id).cloned()
    }

    fn list_drivers(&self) -> Vec<Driver> {
        self.drivers.clone()
    }

    fn list_routes(&self) -> Vec<Route> {
        self.routes.clone()
    }

    fn find_booking(&self, driver_id: DriverId, day: Day) -> Option<RouteId> {
        self.routes
            .iter()
            .find(|route| route.has_assignment(driver_id, day))
            .map(|route| route.id)
    }

    fn append_assignment(&mut self, route_id: RouteId, assignment: Assignment) -> RepoResult<()> {
        if !self
            .drivers
            .iter()
            .any(|driver| driver.id == assignment.driver_id)
        {
            return Err(RepoError::DriverNotFound(assignment.driver_id));
        }
        if let Some(booked_route) = self.find_booking(assignment.driver_id, assignment.day) {
            return Err(RepoError::AlreadyBooked {
                driver_id: assignment.driver_id,
                day: assignment.day,
                route_id: booked_route,
            });
        }
        self.route_mut(route_id)?.assignments.push(assignment);
        Ok(())
    }

    fn remove_assignment(
        &mut self,
        route_id: RouteId,
        assignment: Assignment,
    ) -> RepoResult<usize> {
        let route = self.route_mut(route_id)?;
        let before = route.assignments.len();
        route.assignments.retain(|existing| *existing != assignment);
        Ok(before - route.assignments.len())
    }
}
