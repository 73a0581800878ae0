//! Project, sprint and task planning.
//!
//! Projects own sprints and tasks. Sprints move through a guarded
//! `Planned` → `Active` → `Completed` state machine; task status is free to
//! move in any direction. Validators check entity snapshots against the
//! business rules and report every violation at once. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Business-rule validators in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
