//! Core use-case services.
//!
//! # Responsibility
//! - Validate commands above the repository layer.
//! - Keep callers decoupled from storage details.

pub mod schedule_service;
