//! Task aggregate root, task status and priority.

use super::{ParseStatusError, ProjectId, SprintId, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
///
/// Unlike sprints, task status is not a guarded state machine: any status
/// may follow any other, including moving a finished task back to `Todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task is awaiting review.
    InReview,
    /// Task is finished.
    Done,
}

impl TaskStatus {
    /// Every status, in workflow order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::InReview, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::InReview => "in_review",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "in_review" => Ok(Self::InReview),
            "done" => Ok(Self::Done),
            _ => Err(ParseStatusError::new("task status", value)),
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal priority.
    Medium,
    /// Should be picked up soon.
    High,
    /// Blocks other work.
    Critical,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseStatusError::new("task priority", value)),
        }
    }
}

/// Task aggregate root.
///
/// Mutators never reject input. Hour counts and titles are checked by the
/// [`TaskValidator`](crate::planning::ports::TaskValidator) only when a
/// caller runs it, so for example [`Task::log_hours`] accepts negative
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    priority: TaskPriority,
    status: TaskStatus,
    estimated_hours: i32,
    actual_hours: i32,
    project_id: ProjectId,
    sprint_id: Option<SprintId>,
    assigned_to: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted estimate in hours.
    pub estimated_hours: i32,
    /// Persisted logged hours.
    pub actual_hours: i32,
    /// Owning project.
    pub project_id: ProjectId,
    /// Sprint the task is planned into, if any.
    pub sprint_id: Option<SprintId>,
    /// Assigned user, if any.
    pub assigned_to: Option<UserId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in [`TaskStatus::Todo`] with no logged hours.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
        estimated_hours: i32,
        project_id: ProjectId,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            priority,
            status: TaskStatus::Todo,
            estimated_hours,
            actual_hours: 0,
            project_id,
            sprint_id: None,
            assigned_to: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            estimated_hours: data.estimated_hours,
            actual_hours: data.actual_hours,
            project_id: data.project_id,
            sprint_id: data.sprint_id,
            assigned_to: data.assigned_to,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the estimate in hours.
    #[must_use]
    pub const fn estimated_hours(&self) -> i32 {
        self.estimated_hours
    }

    /// Returns the hours logged so far.
    #[must_use]
    pub const fn actual_hours(&self) -> i32 {
        self.actual_hours
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the sprint the task is planned into, if any.
    #[must_use]
    pub const fn sprint_id(&self) -> Option<SprintId> {
        self.sprint_id
    }

    /// Returns the assigned user, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the descriptive fields and the estimate.
    pub fn update_details(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
        estimated_hours: i32,
        clock: &impl Clock,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.priority = priority;
        self.estimated_hours = estimated_hours;
        self.touch(clock);
    }

    /// Sets the workflow status. Every status is reachable from every other.
    pub fn update_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Assigns the task to a user.
    pub fn assign_to(&mut self, user_id: UserId, clock: &impl Clock) {
        self.assigned_to = Some(user_id);
        self.touch(clock);
    }

    /// Clears the assignee.
    pub fn unassign(&mut self, clock: &impl Clock) {
        self.assigned_to = None;
        self.touch(clock);
    }

    /// Adds `hours` to the logged total.
    ///
    /// Zero and negative values are accepted. The sum saturates at the
    /// `i32` bounds.
    pub fn log_hours(&mut self, hours: i32, clock: &impl Clock) {
        self.actual_hours = self.actual_hours.saturating_add(hours);
        self.touch(clock);
    }

    /// Plans the task into a sprint.
    ///
    /// The entity does not check that the sprint belongs to the task's
    /// project; [`TaskService`](crate::planning::services::TaskService)
    /// does.
    pub fn assign_to_sprint(&mut self, sprint_id: SprintId, clock: &impl Clock) {
        self.sprint_id = Some(sprint_id);
        self.touch(clock);
    }

    /// Removes the task from its sprint.
    pub fn unassign_sprint(&mut self, clock: &impl Clock) {
        self.sprint_id = None;
        self.touch(clock);
    }

    /// Clears the sprint reference without touching `updated_at`.
    ///
    /// Storage-level counterpart of `ON DELETE SET NULL`, used by adapters
    /// when the referenced sprint is deleted.
    pub(crate) const fn detach_from_deleted_sprint(&mut self) {
        self.sprint_id = None;
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
