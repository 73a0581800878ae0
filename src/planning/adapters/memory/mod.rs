//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! tests and single-process deployments without a database.

mod store;

pub use store::{
    InMemoryPlanningStore, InMemoryProjectRepository, InMemorySprintRepository,
    InMemoryTaskRepository,
};
