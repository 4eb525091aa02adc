//! Driver entity.

use crate::model::{normalize_name, EntityValidationError, Named};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a driver.
pub type DriverId = Uuid;

/// A person who can be assigned to routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    /// Trimmed display name.
    pub name: String,
}

impl Driver {
    /// Creates a driver with a freshly generated id.
    ///
    /// Fails with [`EntityValidationError::BlankDriverName`] when `name` is
    /// blank after trimming.
    pub fn new(name: &str) -> Result<Self, EntityValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a driver with a caller-provided id.
    pub fn with_id(id: DriverId, name: &str) -> Result<Self, EntityValidationError> {
        let name = normalize_name(name).ok_or(EntityValidationError::BlankDriverName)?;
        Ok(Self { id, name })
    }

    /// Re-checks entity invariants; used on repository write paths since
    /// fields are public.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        if self.name.trim().is_empty() {
            return Err(EntityValidationError::BlankDriverName);
        }
        Ok(())
    }
}

impl Named for Driver {
    fn name(&self) -> &str {
        &self.name
    }
}
