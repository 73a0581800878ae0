//! End-to-end planning flows through the services and the in-memory store.

use std::sync::Arc;

use super::helpers::store;
use chrono::{Duration, Utc};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::rstest;
use sprintboard::planning::{
    adapters::memory::InMemoryPlanningStore,
    domain::{SprintStatus, TaskId, TaskPriority, TaskStatus, UserId},
    services::{
        CreateProjectRequest, CreateSprintRequest, CreateTaskRequest, PlanningServiceError,
        ProjectService, ServiceErrorKind, SprintService, TaskService,
    },
};
use uuid::Uuid;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn plan_and_run_a_sprint(store: InMemoryPlanningStore) -> eyre::Result<()> {
    let clock = Arc::new(DefaultClock);
    let projects = Arc::new(store.projects());
    let sprints = Arc::new(store.sprints());
    let tasks = Arc::new(store.tasks());
    let project_service = ProjectService::new(Arc::clone(&projects), Arc::clone(&clock));
    let sprint_service =
        SprintService::new(Arc::clone(&sprints), Arc::clone(&projects), Arc::clone(&clock));
    let task_service = TaskService::new(tasks, sprints, projects, clock);

    let start = Utc::now();
    let project = project_service
        .create(
            CreateProjectRequest::new("Checkout revamp", start)
                .with_end_date(start + Duration::days(60)),
        )
        .await?;
    let sprint = sprint_service
        .create(
            CreateSprintRequest::new(project.id(), "Sprint 1", start, start + Duration::days(14))
                .with_goal("Payment form"),
        )
        .await?;
    let task = task_service
        .create(
            CreateTaskRequest::new(project.id(), "Card validation", 5)
                .with_priority(TaskPriority::Critical),
        )
        .await?;
    let developer = UserId::from_uuid(Uuid::new_v4());

    task_service.assign_to_sprint(task.id(), sprint.id()).await?;
    task_service.assign_to(task.id(), developer).await?;
    sprint_service.start(sprint.id()).await?;
    task_service
        .update_status(task.id(), TaskStatus::InProgress)
        .await?;
    task_service.log_hours(task.id(), 3).await?;
    task_service.log_hours(task.id(), 4).await?;
    task_service.update_status(task.id(), TaskStatus::Done).await?;
    let finished = sprint_service.complete(sprint.id()).await?;

    let sprint_tasks = task_service.find_by_sprint(sprint.id()).await?;
    let [done] = sprint_tasks.as_slice() else {
        eyre::bail!("expected one task in the sprint, found {sprint_tasks:?}");
    };
    ensure!(done.status() == TaskStatus::Done, "task not done");
    ensure!(done.actual_hours() == 7, "hours {}", done.actual_hours());
    ensure!(done.assigned_to() == Some(developer), "assignee lost");
    ensure!(finished.status() == SprintStatus::Completed, "sprint not completed");

    let restart = sprint_service.start(sprint.id()).await;
    let restart_kind = restart.as_ref().err().map(PlanningServiceError::kind);
    ensure!(
        restart_kind == Some(ServiceErrorKind::InvalidRequest),
        "completed sprint restarted: {restart:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn service_not_found_errors_classify_for_transport(
    store: InMemoryPlanningStore,
) -> eyre::Result<()> {
    let task_service = TaskService::new(
        Arc::new(store.tasks()),
        Arc::new(store.sprints()),
        Arc::new(store.projects()),
        Arc::new(DefaultClock),
    );

    let result = task_service
        .log_hours(TaskId::new(), 1)
        .await;

    ensure!(
        result.as_ref().err().map(PlanningServiceError::kind) == Some(ServiceErrorKind::NotFound),
        "unexpected result {result:?}"
    );
    Ok(())
}
