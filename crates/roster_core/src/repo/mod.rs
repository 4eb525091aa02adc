//! Entity store contracts and implementations.
//!
//! # Responsibility
//! - Define data access for drivers, routes and assignments.
//! - Keep storage details out of the service and query layers.
//!
//! # Invariants
//! - Repository writes enforce entity `validate()` before mutation.
//! - Referenced lookups return semantic `NotFound` errors.

pub mod schedule_repo;
