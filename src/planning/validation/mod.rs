//! Planning validation implementation.
//!
//! This module provides the individual business rules and the composite
//! validator implementing the validator ports.

pub mod rules;
pub mod service;

pub use service::DefaultPlanningValidator;
