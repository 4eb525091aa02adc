//! Read-side projections consumed by presentation callers.
//!
//! # Responsibility
//! - Answer availability and listing questions without mutating state.
//! - Keep search text and day selection as call parameters, not core state.

pub mod projection;
