//! Sprintboard: project, sprint and task planning.
//!
//! This crate provides the planning core for a single team: projects with a
//! simple lifecycle, sprints driven by a guarded state machine, and tasks
//! with priorities, estimates and logged hours.
//!
//! # Architecture
//!
//! Sprintboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and validation
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Orchestration of load, validate, mutate and persist
//!
//! # Modules
//!
//! - [`planning`]: Projects, sprints, tasks and their validators

pub mod planning;
