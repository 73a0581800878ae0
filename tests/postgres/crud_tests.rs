//! Lookup, ordering, update and write-error tests for the `PostgreSQL`
//! repositories.

use crate::postgres::helpers::{PlanningDb, planning_db, test_runtime};
use crate::test_helpers::{epoch, project_at, sprint_at, task_at};
use chrono::Duration;
use eyre::ensure;
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;
use sprintboard::planning::{
    domain::{
        PersistedProjectData, PersistedTaskData, Project, ProjectId, ProjectStatus, Sprint,
        SprintId, SprintStatus, Task, TaskId, TaskPriority, TaskStatus, UserId,
    },
    ports::{ProjectRepository, RepositoryError, SprintRepository, TaskRepository},
};
use uuid::Uuid;

#[rstest]
fn entities_round_trip_and_unknown_ids_are_absent(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = planning_db(shared_test_cluster, "crud_lookup")?;
    test_runtime()?.block_on(round_trip(&db))
}

async fn round_trip(db: &PlanningDb) -> eyre::Result<()> {
    let project = project_at("Atlas", 0);
    let sprint = sprint_at(project.id(), "Sprint 1", 1);
    let task = task_at(project.id(), Some(sprint.id()), "Wire up login", 2);

    ensure!(db.projects.add(&project).await? == project, "project add differs");
    ensure!(db.sprints.add(&sprint).await? == sprint, "sprint add differs");
    ensure!(db.tasks.add(&task).await? == task, "task add differs");

    ensure!(
        db.projects.find_by_id(project.id()).await? == Some(project),
        "project lookup differs"
    );
    ensure!(
        db.sprints.find_by_id(sprint.id()).await? == Some(sprint),
        "sprint lookup differs"
    );
    ensure!(
        db.tasks.find_by_id(task.id()).await? == Some(task),
        "task lookup differs"
    );

    ensure!(
        db.projects.find_by_id(ProjectId::new()).await?.is_none(),
        "unknown project found"
    );
    ensure!(
        db.sprints.find_by_id(SprintId::new()).await?.is_none(),
        "unknown sprint found"
    );
    ensure!(
        db.tasks.find_by_id(TaskId::new()).await?.is_none(),
        "unknown task found"
    );
    Ok(())
}

#[rstest]
fn listings_order_by_creation_time_then_id(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = planning_db(shared_test_cluster, "crud_order")?;
    test_runtime()?.block_on(ordering(&db))
}

async fn ordering(db: &PlanningDb) -> eyre::Result<()> {
    for project in [project_at("Late", 30), project_at("Early", 0), project_at("Middle", 10)] {
        db.projects.add(&project).await?;
    }
    let names: Vec<String> = db
        .projects
        .list_all()
        .await?
        .iter()
        .map(|project| project.name().to_owned())
        .collect();
    ensure!(names == ["Early", "Middle", "Late"], "unexpected order {names:?}");

    let project = project_at("Ties", 40);
    db.projects.add(&project).await?;
    let first = task_at(project.id(), None, "A", 45);
    let second = task_at(project.id(), None, "B", 45);
    db.tasks.add(&first).await?;
    db.tasks.add(&second).await?;

    let mut expected = vec![first.id(), second.id()];
    expected.sort();
    let listed: Vec<TaskId> = db
        .tasks
        .find_by_project(project.id())
        .await?
        .iter()
        .map(Task::id)
        .collect();
    ensure!(listed == expected, "ties not ordered by id: {listed:?}");
    Ok(())
}

#[rstest]
fn missing_parents_and_duplicates_map_to_typed_errors(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = planning_db(shared_test_cluster, "crud_errors")?;
    test_runtime()?.block_on(write_errors(&db))
}

async fn write_errors(db: &PlanningDb) -> eyre::Result<()> {
    let missing_project = ProjectId::new();
    let orphan_sprint = sprint_at(missing_project, "Orphan", 0);
    let result = db.sprints.add(&orphan_sprint).await;
    ensure!(
        matches!(result, Err(RepositoryError::ProjectNotFound(id)) if id == missing_project),
        "sprint with missing project: {result:?}"
    );

    let orphan_task = task_at(missing_project, None, "Orphan", 0);
    let result = db.tasks.add(&orphan_task).await;
    ensure!(
        matches!(result, Err(RepositoryError::ProjectNotFound(id)) if id == missing_project),
        "task with missing project: {result:?}"
    );

    let project = project_at("Home", 1);
    db.projects.add(&project).await?;
    let missing_sprint = SprintId::new();
    let unplanned = task_at(project.id(), Some(missing_sprint), "Lost", 2);
    let result = db.tasks.add(&unplanned).await;
    ensure!(
        matches!(result, Err(RepositoryError::SprintNotFound(id)) if id == missing_sprint),
        "task with missing sprint: {result:?}"
    );

    let duplicate = db.projects.add(&project).await;
    ensure!(
        matches!(duplicate, Err(RepositoryError::DuplicateProject(id)) if id == project.id()),
        "duplicate project: {duplicate:?}"
    );
    Ok(())
}

#[rstest]
fn updates_of_absent_entities_are_not_found(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = planning_db(shared_test_cluster, "crud_absent")?;
    test_runtime()?.block_on(absent_updates(&db))
}

async fn absent_updates(db: &PlanningDb) -> eyre::Result<()> {
    let project = project_at("Never stored", 0);
    let sprint = sprint_at(project.id(), "Never stored", 0);
    let task = task_at(project.id(), None, "Never stored", 0);

    let result = db.projects.update(&project).await;
    ensure!(
        matches!(result, Err(RepositoryError::ProjectNotFound(id)) if id == project.id()),
        "project update: {result:?}"
    );
    let result = db.sprints.update(&sprint).await;
    ensure!(
        matches!(result, Err(RepositoryError::SprintNotFound(id)) if id == sprint.id()),
        "sprint update: {result:?}"
    );
    let result = db.tasks.update(&task).await;
    ensure!(
        matches!(result, Err(RepositoryError::TaskNotFound(id)) if id == task.id()),
        "task update: {result:?}"
    );

    db.projects.delete(project.id()).await?;
    db.sprints.delete(sprint.id()).await?;
    db.tasks.delete(task.id()).await?;
    Ok(())
}

#[rstest]
fn updates_persist_every_mutable_field(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = planning_db(shared_test_cluster, "crud_update")?;
    test_runtime()?.block_on(full_updates(&db))
}

async fn full_updates(db: &PlanningDb) -> eyre::Result<()> {
    let project = project_at("Short", 0);
    db.projects.add(&project).await?;
    let sprint = sprint_at(project.id(), "Sprint 1", 1);
    db.sprints.add(&sprint).await?;
    let task = task_at(project.id(), None, "Draft", 2);
    db.tasks.add(&task).await?;

    let renamed = Project::from_persisted(PersistedProjectData {
        id: project.id(),
        name: "x".repeat(300),
        description: "Names have no column limit".to_owned(),
        start_date: epoch(),
        end_date: Some(epoch() + Duration::days(90)),
        status: ProjectStatus::Archived,
        created_at: project.created_at(),
        updated_at: epoch() + Duration::minutes(5),
    });
    db.projects.update(&renamed).await?;
    ensure!(
        db.projects.find_by_id(project.id()).await? == Some(renamed),
        "project update not persisted"
    );

    let worked = Task::from_persisted(PersistedTaskData {
        id: task.id(),
        title: "Ship".to_owned(),
        description: "Done and dusted".to_owned(),
        priority: TaskPriority::Critical,
        status: TaskStatus::Done,
        estimated_hours: 5,
        actual_hours: -3,
        project_id: project.id(),
        sprint_id: Some(sprint.id()),
        assigned_to: Some(UserId::from_uuid(Uuid::new_v4())),
        created_at: task.created_at(),
        updated_at: epoch() + Duration::minutes(6),
    });
    db.tasks.update(&worked).await?;
    ensure!(
        db.tasks.find_by_id(task.id()).await? == Some(worked),
        "task update not persisted"
    );
    ensure!(
        db.sprints.find_by_id(sprint.id()).await?.as_ref().map(Sprint::status)
            == Some(SprintStatus::Planned),
        "sprint changed by task update"
    );
    Ok(())
}
