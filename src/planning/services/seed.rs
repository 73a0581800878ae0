//! Demo data for a fresh store.

use super::{PlanningServiceResult, ProjectOverview};
use crate::planning::{
    domain::{Project, Sprint, Task, TaskPriority, TaskStatus},
    ports::{ProjectRepository, SprintRepository, TaskRepository},
};
use chrono::Duration;
use mockable::Clock;

/// Stores a demo project with one active two-week sprint and two tasks
/// planned into it.
///
/// Entities are written through the repository ports as given, without
/// running the validators.
///
/// # Errors
///
/// Returns [`PlanningServiceError::Repository`](super::PlanningServiceError::Repository)
/// when persistence fails.
pub async fn seed_demo_project<P, S, T, C>(
    projects: &P,
    sprints: &S,
    tasks: &T,
    clock: &C,
) -> PlanningServiceResult<ProjectOverview>
where
    P: ProjectRepository,
    S: SprintRepository,
    T: TaskRepository,
    C: Clock + Sync,
{
    let now = clock.utc();
    let project = projects
        .add(&Project::new(
            "E-Commerce Platform",
            "Build a new e-commerce platform",
            now,
            None,
            clock,
        ))
        .await?;

    let mut sprint = Sprint::new(
        "Sprint 1",
        "Implement user authentication",
        now,
        now + Duration::days(14),
        project.id(),
        clock,
    );
    sprint.start(clock)?;
    let active_sprint = sprints.add(&sprint).await?;

    let mut login = Task::new(
        "Implement user login",
        "Create login functionality with JWT",
        TaskPriority::High,
        8,
        project.id(),
        clock,
    );
    login.update_status(TaskStatus::InProgress, clock);
    login.log_hours(4, clock);
    login.assign_to_sprint(active_sprint.id(), clock);

    let mut registration = Task::new(
        "Create user registration",
        "Implement user registration with validation",
        TaskPriority::High,
        6,
        project.id(),
        clock,
    );
    registration.assign_to_sprint(active_sprint.id(), clock);

    let stored_tasks = vec![tasks.add(&login).await?, tasks.add(&registration).await?];
    tracing::info!(
        project_id = %project.id(),
        sprint_id = %active_sprint.id(),
        "seeded demo project"
    );
    Ok(ProjectOverview::new(project, vec![active_sprint], stored_tasks))
}
