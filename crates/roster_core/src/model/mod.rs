//! Domain model for the weekly driver roster.
//!
//! # Responsibility
//! - Define drivers, routes, assignments and weekday labels.
//! - Own entity-level validation shared by every write path.
//!
//! # Invariants
//! - Every driver and route is identified by a stable UUID.
//! - Stored names are trimmed and never blank.
//! - An assignment only exists inside the route it belongs to.

pub mod day;
pub mod driver;
pub mod route;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Entity validation error raised before any store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityValidationError {
    /// Driver name is blank after trim.
    BlankDriverName,
    /// Route name is blank after trim.
    BlankRouteName,
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankDriverName => write!(f, "driver name must not be blank"),
            Self::BlankRouteName => write!(f, "route name must not be blank"),
        }
    }
}

impl Error for EntityValidationError {}

/// Entities that carry a display name and can be searched by it.
pub trait Named {
    fn name(&self) -> &str;
}

/// Trims a display name, returning `None` when nothing remains.
pub(crate) fn normalize_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
