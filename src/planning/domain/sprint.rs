//! Sprint aggregate root and the sprint state machine.

use super::{ParseStatusError, PlanningDomainError, ProjectId, SprintId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sprint lifecycle status.
///
/// The machine is one-directional: `Planned` → `Active` → `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintStatus {
    /// Sprint is scheduled but has not started.
    Planned,
    /// Sprint is running.
    Active,
    /// Sprint has finished.
    Completed,
}

impl SprintStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SprintStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "planned" => Ok(Self::Planned),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStatusError::new("sprint status", value)),
        }
    }
}

/// Guarded transitions of the sprint state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintTransition {
    /// `Planned` → `Active`.
    Start,
    /// `Active` → `Completed`.
    Complete,
}

impl SprintTransition {
    /// Status the sprint must be in for the transition to apply.
    #[must_use]
    pub const fn required_status(self) -> SprintStatus {
        match self {
            Self::Start => SprintStatus::Planned,
            Self::Complete => SprintStatus::Active,
        }
    }

    /// Status the sprint ends up in after the transition.
    #[must_use]
    pub const fn target_status(self) -> SprintStatus {
        match self {
            Self::Start => SprintStatus::Active,
            Self::Complete => SprintStatus::Completed,
        }
    }

    /// Human-readable reason reported when the transition is rejected.
    #[must_use]
    pub const fn rejection_message(self) -> &'static str {
        match self {
            Self::Start => "Only planned sprints can be started",
            Self::Complete => "Only active sprints can be completed",
        }
    }
}

/// Sprint aggregate root.
///
/// Tasks refer to a sprint weakly: deleting a sprint detaches its tasks
/// instead of removing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    id: SprintId,
    name: String,
    goal: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    status: SprintStatus,
    project_id: ProjectId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted sprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSprintData {
    /// Persisted sprint identifier.
    pub id: SprintId,
    /// Persisted name.
    pub name: String,
    /// Persisted goal.
    pub goal: String,
    /// Persisted start date.
    pub start_date: DateTime<Utc>,
    /// Persisted end date.
    pub end_date: DateTime<Utc>,
    /// Persisted lifecycle status.
    pub status: SprintStatus,
    /// Owning project.
    pub project_id: ProjectId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Sprint {
    /// Creates a new planned sprint for the given project.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        goal: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        project_id: ProjectId,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: SprintId::new(),
            name: name.into(),
            goal: goal.into(),
            start_date,
            end_date,
            status: SprintStatus::Planned,
            project_id,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a sprint from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedSprintData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            goal: data.goal,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
            project_id: data.project_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the sprint identifier.
    #[must_use]
    pub const fn id(&self) -> SprintId {
        self.id
    }

    /// Returns the sprint name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sprint goal.
    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Returns the end date.
    #[must_use]
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> SprintStatus {
        self.status
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
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

    /// Starts a planned sprint.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::IllegalSprintTransition`] unless the
    /// sprint is [`SprintStatus::Planned`].
    pub fn start(&mut self, clock: &impl Clock) -> Result<(), PlanningDomainError> {
        self.apply(SprintTransition::Start, clock)
    }

    /// Completes an active sprint.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::IllegalSprintTransition`] unless the
    /// sprint is [`SprintStatus::Active`].
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), PlanningDomainError> {
        self.apply(SprintTransition::Complete, clock)
    }

    /// Replaces the descriptive fields and schedule.
    ///
    /// Permitted in every status.
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        goal: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        clock: &impl Clock,
    ) {
        self.name = name.into();
        self.goal = goal.into();
        self.start_date = start_date;
        self.end_date = end_date;
        self.touch(clock);
    }

    fn apply(
        &mut self,
        transition: SprintTransition,
        clock: &impl Clock,
    ) -> Result<(), PlanningDomainError> {
        if self.status != transition.required_status() {
            return Err(PlanningDomainError::IllegalSprintTransition {
                sprint_id: self.id,
                from: self.status,
                attempted: transition,
            });
        }
        self.status = transition.target_status();
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
