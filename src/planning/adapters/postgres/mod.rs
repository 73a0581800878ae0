//! `PostgreSQL` adapters for planning persistence.
//!
//! Cascades are enforced by the schema: sprints and tasks reference their
//! project with `ON DELETE CASCADE`, and tasks reference their sprint with
//! `ON DELETE SET NULL`.

mod conversion;
mod models;
mod repository;
mod schema;

pub use repository::{
    PlanningPgPool, PostgresProjectRepository, PostgresSprintRepository, PostgresTaskRepository,
};
