//! Deletion rules enforced by the planning schema's foreign keys.

use crate::postgres::helpers::{PlanningDb, planning_db, test_runtime};
use crate::test_helpers::{project_at, sprint_at, task_at};
use eyre::ensure;
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;
use sprintboard::planning::{
    domain::Task,
    ports::{ProjectRepository, SprintRepository, TaskRepository},
};

#[rstest]
fn deleting_a_project_removes_its_sprints_and_tasks(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = planning_db(shared_test_cluster, "cascade_project")?;
    test_runtime()?.block_on(project_cascade(&db))
}

async fn project_cascade(db: &PlanningDb) -> eyre::Result<()> {
    let doomed = project_at("Doomed", 0);
    let kept = project_at("Kept", 1);
    db.projects.add(&doomed).await?;
    db.projects.add(&kept).await?;

    let doomed_sprint = sprint_at(doomed.id(), "Sprint 1", 2);
    let kept_sprint = sprint_at(kept.id(), "Sprint 1", 3);
    db.sprints.add(&doomed_sprint).await?;
    db.sprints.add(&kept_sprint).await?;

    let planned = task_at(doomed.id(), Some(doomed_sprint.id()), "Planned", 4);
    let backlog = task_at(doomed.id(), None, "Backlog", 5);
    let survivor = task_at(kept.id(), Some(kept_sprint.id()), "Survivor", 6);
    for task in [&planned, &backlog, &survivor] {
        db.tasks.add(task).await?;
    }

    db.projects.delete(doomed.id()).await?;

    ensure!(
        db.projects.find_by_id(doomed.id()).await?.is_none(),
        "project survived deletion"
    );
    ensure!(
        db.sprints.find_by_id(doomed_sprint.id()).await?.is_none(),
        "sprint survived its project"
    );
    ensure!(
        db.tasks.find_by_project(doomed.id()).await?.is_empty(),
        "tasks survived their project"
    );

    ensure!(
        db.projects.list_all().await? == vec![kept],
        "other project affected"
    );
    ensure!(
        db.sprints.find_by_project(kept_sprint.project_id()).await? == vec![kept_sprint],
        "other project's sprint affected"
    );
    ensure!(
        db.tasks.find_by_id(survivor.id()).await? == Some(survivor),
        "other project's task affected"
    );
    Ok(())
}

#[rstest]
fn deleting_a_sprint_returns_its_tasks_to_the_backlog(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = planning_db(shared_test_cluster, "cascade_sprint")?;
    test_runtime()?.block_on(sprint_detach(&db))
}

async fn sprint_detach(db: &PlanningDb) -> eyre::Result<()> {
    let project = project_at("Atlas", 0);
    db.projects.add(&project).await?;
    let sprint = sprint_at(project.id(), "Sprint 1", 1);
    let other_sprint = sprint_at(project.id(), "Sprint 2", 2);
    db.sprints.add(&sprint).await?;
    db.sprints.add(&other_sprint).await?;

    let first = task_at(project.id(), Some(sprint.id()), "First", 3);
    let second = task_at(project.id(), Some(sprint.id()), "Second", 4);
    let elsewhere = task_at(project.id(), Some(other_sprint.id()), "Elsewhere", 5);
    for task in [&first, &second, &elsewhere] {
        db.tasks.add(task).await?;
    }

    db.sprints.delete(sprint.id()).await?;

    ensure!(
        db.sprints.find_by_id(sprint.id()).await?.is_none(),
        "sprint survived deletion"
    );
    ensure!(
        db.tasks.find_by_sprint(sprint.id()).await?.is_empty(),
        "tasks still reference the deleted sprint"
    );

    for original in [&first, &second] {
        let stored = db
            .tasks
            .find_by_id(original.id())
            .await?
            .ok_or_else(|| eyre::eyre!("task {} deleted with its sprint", original.id()))?;
        ensure!(stored.sprint_id().is_none(), "task not returned to backlog");
        ensure!(
            stored.updated_at() == original.updated_at(),
            "detaching changed updated_at"
        );
        ensure!(
            stored.title() == original.title(),
            "detaching changed other fields"
        );
    }

    let remaining: Vec<_> = db
        .tasks
        .find_by_sprint(other_sprint.id())
        .await?
        .iter()
        .map(Task::id)
        .collect();
    ensure!(
        remaining == vec![elsewhere.id()],
        "other sprint's tasks affected: {remaining:?}"
    );
    Ok(())
}
