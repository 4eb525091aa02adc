//! Route entity and its day-specific assignments.
//!
//! # Invariants
//! - `assignments` keeps insertion order for stable display.
//! - `(route id, driver id, day)` is the implicit key of an assignment.

use crate::model::day::Day;
use crate::model::driver::DriverId;
use crate::model::{normalize_name, EntityValidationError, Named};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a route.
pub type RouteId = Uuid;

/// Binding of one driver to the owning route for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub driver_id: DriverId,
    pub day: Day,
}

impl Assignment {
    pub fn new(driver_id: DriverId, day: Day) -> Self {
        Self { driver_id, day }
    }
}

/// Schedulable unit of work spanning a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    /// Trimmed display name.
    pub name: String,
    pub assignments: Vec<Assignment>,
}

impl Route {
    /// Creates an empty route with a freshly generated id.
    pub fn new(name: &str) -> Result<Self, EntityValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an empty route with a caller-provided id.
    pub fn with_id(id: RouteId, name: &str) -> Result<Self, EntityValidationError> {
        let name = normalize_name(name).ok_or(EntityValidationError::BlankRouteName)?;
        Ok(Self {
            id,
            name,
            assignments: Vec::new(),
        })
    }

    pub fn validate(&self) -> Result<(), EntityValidationError> {
        if self.name.trim().is_empty() {
            return Err(EntityValidationError::BlankRouteName);
        }
        Ok(())
    }

    /// Returns whether this route books `driver_id` on `day`.
    pub fn has_assignment(&self, driver_id: DriverId, day: Day) -> bool {
        self.assignments
            .iter()
            .any(|assignment| assignment.driver_id == driver_id && assignment.day == day)
    }

    /// Returns whether no driver is booked on this route for any day.
    pub fn is_unassigned(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl Named for Route {
    fn name(&self) -> &str {
        &self.name
    }
}
