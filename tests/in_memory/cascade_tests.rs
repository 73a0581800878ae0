//! Deletion cascade tests for the in-memory store.

use super::helpers::{project_at, sprint_at, store, task_at};
use eyre::ensure;
use rstest::rstest;
use sprintboard::planning::{
    adapters::memory::InMemoryPlanningStore,
    ports::{ProjectRepository, SprintRepository, TaskRepository},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_removes_its_sprints_and_tasks(
    store: InMemoryPlanningStore,
) -> eyre::Result<()> {
    let doomed = project_at("Doomed", 0);
    let kept = project_at("Kept", 1);
    store.projects().add(&doomed).await?;
    store.projects().add(&kept).await?;
    let doomed_sprint = sprint_at(doomed.id(), "Doomed sprint", 2);
    let kept_sprint = sprint_at(kept.id(), "Kept sprint", 3);
    store.sprints().add(&doomed_sprint).await?;
    store.sprints().add(&kept_sprint).await?;
    let doomed_task = task_at(doomed.id(), Some(doomed_sprint.id()), "Doomed task", 4);
    let kept_task = task_at(kept.id(), Some(kept_sprint.id()), "Kept task", 5);
    store.tasks().add(&doomed_task).await?;
    store.tasks().add(&kept_task).await?;

    store.projects().delete(doomed.id()).await?;

    ensure!(
        store.sprints().find_by_id(doomed_sprint.id()).await?.is_none(),
        "sprint of deleted project survived"
    );
    ensure!(
        store.tasks().find_by_id(doomed_task.id()).await?.is_none(),
        "task of deleted project survived"
    );
    ensure!(
        store.tasks().find_by_id(kept_task.id()).await? == Some(kept_task),
        "task of another project changed"
    );
    ensure!(
        store.projects().list_all().await? == vec![kept],
        "unexpected remaining projects"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_sprint_detaches_its_tasks(store: InMemoryPlanningStore) -> eyre::Result<()> {
    let project = project_at("Project", 0);
    store.projects().add(&project).await?;
    let sprint = sprint_at(project.id(), "Sprint", 1);
    store.sprints().add(&sprint).await?;
    let planned = task_at(project.id(), Some(sprint.id()), "Planned", 2);
    store.tasks().add(&planned).await?;

    store.sprints().delete(sprint.id()).await?;

    let survivor = store
        .tasks()
        .find_by_id(planned.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task removed with its sprint"))?;
    ensure!(survivor.sprint_id().is_none(), "sprint reference kept");
    ensure!(
        survivor.updated_at() == planned.updated_at(),
        "detaching must not count as a task edit"
    );
    ensure!(
        store.tasks().find_by_sprint(sprint.id()).await?.is_empty(),
        "tasks still listed under deleted sprint"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repository_handles_share_one_store(store: InMemoryPlanningStore) -> eyre::Result<()> {
    let project = project_at("Shared", 0);
    let projects = store.projects();
    projects.add(&project).await?;

    let cloned = store.clone();
    let task = task_at(project.id(), None, "Seen everywhere", 1);
    cloned.tasks().add(&task).await?;

    ensure!(
        store.tasks().find_by_project(project.id()).await? == vec![task],
        "task added through a cloned store is not visible"
    );
    Ok(())
}
