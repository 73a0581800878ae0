//! Then steps for sprint lifecycle BDD scenarios.

use super::world::{SprintLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use sprintboard::planning::{
    domain::{PlanningDomainError, SprintStatus},
    services::PlanningServiceError,
};

#[then(r#"the sprint status is "{status}""#)]
fn sprint_status_is(world: &SprintLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = SprintStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = world.sprint()?.id();

    let stored = run_async(world.sprints.find_by_id(id))?
        .ok_or_else(|| eyre::eyre!("sprint {id} missing from the store"))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then(r#"the transition fails with "{message}""#)]
fn transition_fails_with(
    world: &SprintLifecycleWorld,
    message: String,
) -> Result<(), eyre::Report> {
    let result = world
        .last_sprint_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    let Err(PlanningServiceError::Domain(
        err @ PlanningDomainError::IllegalSprintTransition { .. },
    )) = result
    else {
        return Err(eyre::eyre!("expected an illegal transition, got {result:?}"));
    };
    if err.to_string() != message {
        return Err(eyre::eyre!("expected message {message:?}, got {err}"));
    }
    Ok(())
}

#[then("the task still exists without a sprint")]
fn task_without_sprint(world: &SprintLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();

    let stored = run_async(world.tasks.find_by_id(id))?
        .ok_or_else(|| eyre::eyre!("task {id} was deleted with its sprint"))?;

    if let Some(sprint_id) = stored.sprint_id() {
        return Err(eyre::eyre!("task still references sprint {sprint_id}"));
    }
    Ok(())
}

#[then("planning fails because the sprint belongs to another project")]
fn planning_fails_with_mismatch(world: &SprintLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_task_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing planning result"))?;

    if !matches!(result, Err(PlanningServiceError::SprintProjectMismatch { .. })) {
        return Err(eyre::eyre!(
            "expected SprintProjectMismatch error, got {result:?}"
        ));
    }

    let id = world.task()?.id();
    let stored = run_async(world.tasks.find_by_id(id))?
        .ok_or_else(|| eyre::eyre!("task {id} missing from the store"))?;
    if stored.sprint_id().is_some() {
        return Err(eyre::eyre!("rejected planning still changed the task"));
    }
    Ok(())
}
