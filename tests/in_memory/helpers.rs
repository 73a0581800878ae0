//! Shared test helpers for in-memory store integration tests.

pub use crate::test_helpers::{project_at, sprint_at, task_at};
use rstest::fixture;
use sprintboard::planning::adapters::memory::InMemoryPlanningStore;

/// Provides a fresh store for each test.
#[fixture]
pub fn store() -> InMemoryPlanningStore {
    InMemoryPlanningStore::new()
}
