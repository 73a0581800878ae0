//! When steps for sprint lifecycle BDD scenarios.

use super::world::{SprintLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the sprint is started")]
fn start_sprint(world: &mut SprintLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.sprint()?.id();
    let result = run_async(world.sprints.start(id));
    if let Ok(ref updated) = result {
        world.sprint = Some(updated.clone());
    }
    world.last_sprint_result = Some(result);
    Ok(())
}

#[when("the sprint is completed")]
fn complete_sprint(world: &mut SprintLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.sprint()?.id();
    let result = run_async(world.sprints.complete(id));
    if let Ok(ref updated) = result {
        world.sprint = Some(updated.clone());
    }
    world.last_sprint_result = Some(result);
    Ok(())
}

#[when("the sprint is deleted")]
fn delete_sprint(world: &mut SprintLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.sprint()?.id();
    run_async(world.sprints.delete(id)).wrap_err("delete sprint")?;
    Ok(())
}

#[when("the task is planned into the other project's sprint")]
fn plan_into_other_sprint(world: &mut SprintLifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let sprint_id = world
        .other_sprint
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing other sprint in scenario world"))?
        .id();
    world.last_task_result = Some(run_async(world.tasks.assign_to_sprint(task_id, sprint_id)));
    Ok(())
}
