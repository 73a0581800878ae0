//! Request payloads accepted by the planning services.

use crate::planning::domain::{ProjectId, TaskPriority};
use chrono::{DateTime, Utc};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) start_date: DateTime<Utc>,
    pub(crate) end_date: Option<DateTime<Utc>>,
}

impl CreateProjectRequest {
    /// Creates a request with the required project fields.
    #[must_use]
    pub fn new(name: impl Into<String>, start_date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            start_date,
            end_date: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the planned end date.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Request payload for creating a sprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSprintRequest {
    pub(crate) project_id: ProjectId,
    pub(crate) name: String,
    pub(crate) goal: String,
    pub(crate) start_date: DateTime<Utc>,
    pub(crate) end_date: DateTime<Utc>,
}

impl CreateSprintRequest {
    /// Creates a request with the required sprint fields.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        name: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            project_id,
            name: name.into(),
            goal: String::new(),
            start_date,
            end_date,
        }
    }

    /// Sets the sprint goal.
    #[must_use]
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }
}

/// Request payload replacing a sprint's descriptive fields and schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSprintRequest {
    pub(crate) name: String,
    pub(crate) goal: String,
    pub(crate) start_date: DateTime<Utc>,
    pub(crate) end_date: DateTime<Utc>,
}

impl UpdateSprintRequest {
    /// Creates an update request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        goal: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            goal: goal.into(),
            start_date,
            end_date,
        }
    }
}

/// Request payload for creating a task.
///
/// Priority defaults to [`TaskPriority::Medium`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(crate) project_id: ProjectId,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) priority: TaskPriority,
    pub(crate) estimated_hours: i32,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>, estimated_hours: i32) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: String::new(),
            priority: TaskPriority::Medium,
            estimated_hours,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Request payload replacing a task's descriptive fields and estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) priority: TaskPriority,
    pub(crate) estimated_hours: i32,
}

impl UpdateTaskRequest {
    /// Creates an update request.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
        estimated_hours: i32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
            estimated_hours,
        }
    }
}
