//! Diesel row models for planning persistence.

use super::schema::{projects, sprints, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Internal project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Planned start date.
    pub start_date: DateTime<Utc>,
    /// Optional planned end date.
    pub end_date: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Internal project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Planned start date.
    pub start_date: DateTime<Utc>,
    /// Optional planned end date.
    pub end_date: Option<DateTime<Utc>>,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for sprint records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sprints)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SprintRow {
    /// Internal sprint identifier.
    pub id: uuid::Uuid,
    /// Sprint name.
    pub name: String,
    /// Sprint goal.
    pub goal: String,
    /// Sprint start date.
    pub start_date: DateTime<Utc>,
    /// Sprint end date.
    pub end_date: DateTime<Utc>,
    /// Lifecycle status.
    pub status: String,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for sprint records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = sprints)]
pub struct NewSprintRow {
    /// Internal sprint identifier.
    pub id: uuid::Uuid,
    /// Sprint name.
    pub name: String,
    /// Sprint goal.
    pub goal: String,
    /// Sprint start date.
    pub start_date: DateTime<Utc>,
    /// Sprint end date.
    pub end_date: DateTime<Utc>,
    /// Lifecycle status.
    pub status: String,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Priority.
    pub priority: String,
    /// Workflow status.
    pub status: String,
    /// Estimate in hours.
    pub estimated_hours: i32,
    /// Logged hours.
    pub actual_hours: i32,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Sprint the task is planned into.
    pub sprint_id: Option<uuid::Uuid>,
    /// Assigned user reference.
    pub assigned_to: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Priority.
    pub priority: String,
    /// Workflow status.
    pub status: String,
    /// Estimate in hours.
    pub estimated_hours: i32,
    /// Logged hours.
    pub actual_hours: i32,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Sprint the task is planned into.
    pub sprint_id: Option<uuid::Uuid>,
    /// Assigned user reference.
    pub assigned_to: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
