//! Validation service implementation.
//!
//! Provides the default implementation of the planning validator ports,
//! running every rule in declaration order and collecting all violations.

use crate::planning::{
    domain::{Project, Sprint, Task},
    ports::{
        ProjectValidator, SprintValidator, TaskValidator, ValidationConfig, ValidationReport,
        ValidationViolation,
    },
    validation::rules,
};
use chrono::{DateTime, Utc};

/// Default implementation of the project, sprint and task validators.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use mockable::DefaultClock;
/// use sprintboard::planning::domain::Project;
/// use sprintboard::planning::ports::ProjectValidator;
/// use sprintboard::planning::validation::DefaultPlanningValidator;
///
/// let clock = DefaultClock;
/// let project = Project::new("", "no name", Utc::now(), None, &clock);
///
/// let report = DefaultPlanningValidator::new().validate(&project, Utc::now());
/// assert!(!report.is_valid());
/// assert_eq!(report.messages(), vec!["Project name is required".to_owned()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultPlanningValidator {
    config: ValidationConfig,
}

impl DefaultPlanningValidator {
    /// Creates a validator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

fn collect(checks: impl IntoIterator<Item = Result<(), ValidationViolation>>) -> ValidationReport {
    ValidationReport::new(checks.into_iter().filter_map(Result::err).collect())
}

impl ProjectValidator for DefaultPlanningValidator {
    fn validate(&self, project: &Project, now: DateTime<Utc>) -> ValidationReport {
        collect([
            rules::validate_project_name_present(project),
            rules::validate_project_name_length(project, &self.config),
            rules::validate_project_schedule(project),
            rules::validate_project_start_not_past(project, now, &self.config),
        ])
    }
}

impl SprintValidator for DefaultPlanningValidator {
    fn validate(&self, sprint: &Sprint) -> ValidationReport {
        collect([
            rules::validate_sprint_name_present(sprint),
            rules::validate_sprint_name_length(sprint, &self.config),
            rules::validate_sprint_schedule(sprint),
        ])
    }
}

impl TaskValidator for DefaultPlanningValidator {
    fn validate(&self, task: &Task) -> ValidationReport {
        collect([
            rules::validate_task_title_present(task),
            rules::validate_task_title_length(task, &self.config),
            rules::validate_estimated_hours(task),
            rules::validate_actual_hours(task),
        ])
    }
}
