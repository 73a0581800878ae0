//! Validator ports for planning entities.
//!
//! Validators check an entity snapshot against the business rules and
//! report every violation they find. They never fail and never stop at the
//! first broken rule.

use crate::planning::domain::{Project, Sprint, Task};
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// A single broken business rule.
///
/// The `Display` output is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationViolation {
    /// The project name is empty or whitespace-only.
    #[error("Project name is required")]
    ProjectNameRequired,

    /// The project name is longer than the configured limit.
    #[error("Project name must not exceed {max} characters")]
    ProjectNameTooLong {
        /// Configured maximum length in characters.
        max: usize,
    },

    /// The project ends before it starts.
    #[error("Start date must be before end date")]
    ProjectEndsBeforeStart,

    /// The project starts on a day before the validation date.
    #[error("Start date cannot be in the past")]
    ProjectStartsInPast,

    /// The sprint name is empty or whitespace-only.
    #[error("Sprint name is required")]
    SprintNameRequired,

    /// The sprint name is longer than the configured limit.
    #[error("Sprint name must not exceed {max} characters")]
    SprintNameTooLong {
        /// Configured maximum length in characters.
        max: usize,
    },

    /// The sprint ends before it starts.
    #[error("Sprint start date must be before end date")]
    SprintEndsBeforeStart,

    /// The task title is empty or whitespace-only.
    #[error("Task title is required")]
    TaskTitleRequired,

    /// The task title is longer than the configured limit.
    #[error("Task title must not exceed {max} characters")]
    TaskTitleTooLong {
        /// Configured maximum length in characters.
        max: usize,
    },

    /// The estimate is zero or negative.
    #[error("Estimated hours must be greater than zero")]
    EstimateNotPositive,

    /// The logged hours total is negative.
    #[error("Actual hours cannot be negative")]
    ActualHoursNegative,
}

impl ValidationViolation {
    /// Returns whether the violation concerns a field a task details update
    /// writes: the title or the estimate.
    #[must_use]
    pub const fn is_task_detail(&self) -> bool {
        matches!(
            self,
            Self::TaskTitleRequired | Self::TaskTitleTooLong { .. } | Self::EstimateNotPositive
        )
    }
}

/// Outcome of validating one entity.
///
/// Violations are kept in rule declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<ValidationViolation>,
}

impl ValidationReport {
    /// Creates a report from collected violations.
    #[must_use]
    pub const fn new(violations: Vec<ValidationViolation>) -> Self {
        Self { violations }
    }

    /// Returns whether no rule was broken.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations in rule order.
    #[must_use]
    pub fn violations(&self) -> &[ValidationViolation] {
        &self.violations
    }

    /// Returns the violation messages in rule order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Returns whether the report contains the given violation.
    #[must_use]
    pub fn contains(&self, violation: &ValidationViolation) -> bool {
        self.violations.contains(violation)
    }

    /// Keeps only the violations matching `keep`, preserving rule order.
    #[must_use]
    pub fn retaining(mut self, keep: impl Fn(&ValidationViolation) -> bool) -> Self {
        self.violations.retain(keep);
        self
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

/// Checks projects against the project rules.
pub trait ProjectValidator: Send + Sync {
    /// Validates a project as of `now`.
    ///
    /// `now` anchors the "start date cannot be in the past" rule.
    fn validate(&self, project: &Project, now: DateTime<Utc>) -> ValidationReport;
}

/// Checks sprints against the sprint rules.
pub trait SprintValidator: Send + Sync {
    /// Validates a sprint.
    fn validate(&self, sprint: &Sprint) -> ValidationReport;
}

/// Checks tasks against the task rules.
pub trait TaskValidator: Send + Sync {
    /// Validates a task.
    fn validate(&self, task: &Task) -> ValidationReport;

    /// Validates only the rules a details update can break.
    ///
    /// Logged hours are left out: a task whose total went negative through
    /// `log_hours` can still be renamed or re-estimated.
    fn validate_details(&self, task: &Task) -> ValidationReport {
        self.validate(task).retaining(ValidationViolation::is_task_detail)
    }
}

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use sprintboard::planning::ports::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_project_name_length, 255);
/// assert!(config.reject_past_start_dates);
///
/// let lenient = ValidationConfig::lenient();
/// assert!(!lenient.reject_past_start_dates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum project name length in characters.
    pub max_project_name_length: usize,
    /// Maximum sprint name length in characters.
    pub max_sprint_name_length: usize,
    /// Maximum task title length in characters.
    pub max_task_title_length: usize,
    /// Whether a project starting before the validation day is rejected.
    pub reject_past_start_dates: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_project_name_length: 255,
            max_sprint_name_length: 100,
            max_task_title_length: 200,
            reject_past_start_dates: true,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that accepts projects starting in the past.
    ///
    /// Useful when importing historical projects.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            reject_past_start_dates: false,
            ..Self::default()
        }
    }
}
