//! Individual validation rule implementations.
//!
//! Each rule is a pure function checking one aspect of an entity. Rules
//! return `Ok(())` when satisfied or the specific violation otherwise.

use crate::planning::{
    domain::{Project, Sprint, Task},
    ports::{ValidationConfig, ValidationViolation},
};
use chrono::{DateTime, Utc};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn exceeds(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

/// Validates that the project has a non-blank name.
///
/// # Errors
///
/// Returns [`ValidationViolation::ProjectNameRequired`] if the name is
/// empty or whitespace-only.
pub fn validate_project_name_present(project: &Project) -> Result<(), ValidationViolation> {
    if is_blank(project.name()) {
        return Err(ValidationViolation::ProjectNameRequired);
    }
    Ok(())
}

/// Validates the project name length.
///
/// # Errors
///
/// Returns [`ValidationViolation::ProjectNameTooLong`] if the name has more
/// characters than the configured limit.
pub fn validate_project_name_length(
    project: &Project,
    config: &ValidationConfig,
) -> Result<(), ValidationViolation> {
    let max = config.max_project_name_length;
    if exceeds(project.name(), max) {
        return Err(ValidationViolation::ProjectNameTooLong { max });
    }
    Ok(())
}

/// Validates that a project with an end date does not end before it starts.
///
/// # Errors
///
/// Returns [`ValidationViolation::ProjectEndsBeforeStart`] if the start
/// date is after the end date.
pub fn validate_project_schedule(project: &Project) -> Result<(), ValidationViolation> {
    match project.end_date() {
        Some(end_date) if project.start_date() > end_date => {
            Err(ValidationViolation::ProjectEndsBeforeStart)
        }
        _ => Ok(()),
    }
}

/// Validates that the project does not start on a day before `now`.
///
/// The comparison is by UTC calendar day, so a project starting earlier
/// today is still accepted. Disabled when
/// [`ValidationConfig::reject_past_start_dates`] is `false`.
///
/// # Errors
///
/// Returns [`ValidationViolation::ProjectStartsInPast`] if the start day is
/// before the current day.
pub fn validate_project_start_not_past(
    project: &Project,
    now: DateTime<Utc>,
    config: &ValidationConfig,
) -> Result<(), ValidationViolation> {
    if config.reject_past_start_dates && project.start_date().date_naive() < now.date_naive() {
        return Err(ValidationViolation::ProjectStartsInPast);
    }
    Ok(())
}

/// Validates that the sprint has a non-blank name.
///
/// # Errors
///
/// Returns [`ValidationViolation::SprintNameRequired`] if the name is empty
/// or whitespace-only.
pub fn validate_sprint_name_present(sprint: &Sprint) -> Result<(), ValidationViolation> {
    if is_blank(sprint.name()) {
        return Err(ValidationViolation::SprintNameRequired);
    }
    Ok(())
}

/// Validates the sprint name length.
///
/// # Errors
///
/// Returns [`ValidationViolation::SprintNameTooLong`] if the name has more
/// characters than the configured limit.
pub fn validate_sprint_name_length(
    sprint: &Sprint,
    config: &ValidationConfig,
) -> Result<(), ValidationViolation> {
    let max = config.max_sprint_name_length;
    if exceeds(sprint.name(), max) {
        return Err(ValidationViolation::SprintNameTooLong { max });
    }
    Ok(())
}

/// Validates that the sprint does not end before it starts.
///
/// # Errors
///
/// Returns [`ValidationViolation::SprintEndsBeforeStart`] if the start date
/// is after the end date.
pub fn validate_sprint_schedule(sprint: &Sprint) -> Result<(), ValidationViolation> {
    if sprint.start_date() > sprint.end_date() {
        return Err(ValidationViolation::SprintEndsBeforeStart);
    }
    Ok(())
}

/// Validates that the task has a non-blank title.
///
/// # Errors
///
/// Returns [`ValidationViolation::TaskTitleRequired`] if the title is empty
/// or whitespace-only.
pub fn validate_task_title_present(task: &Task) -> Result<(), ValidationViolation> {
    if is_blank(task.title()) {
        return Err(ValidationViolation::TaskTitleRequired);
    }
    Ok(())
}

/// Validates the task title length.
///
/// # Errors
///
/// Returns [`ValidationViolation::TaskTitleTooLong`] if the title has more
/// characters than the configured limit.
pub fn validate_task_title_length(
    task: &Task,
    config: &ValidationConfig,
) -> Result<(), ValidationViolation> {
    let max = config.max_task_title_length;
    if exceeds(task.title(), max) {
        return Err(ValidationViolation::TaskTitleTooLong { max });
    }
    Ok(())
}

/// Validates that the estimate is positive.
///
/// # Errors
///
/// Returns [`ValidationViolation::EstimateNotPositive`] if the estimate is
/// zero or negative.
pub const fn validate_estimated_hours(task: &Task) -> Result<(), ValidationViolation> {
    if task.estimated_hours() <= 0 {
        return Err(ValidationViolation::EstimateNotPositive);
    }
    Ok(())
}

/// Validates that the logged hours total is not negative.
///
/// # Errors
///
/// Returns [`ValidationViolation::ActualHoursNegative`] if the total is
/// below zero.
pub const fn validate_actual_hours(task: &Task) -> Result<(), ValidationViolation> {
    if task.actual_hours() < 0 {
        return Err(ValidationViolation::ActualHoursNegative);
    }
    Ok(())
}
