//! Then steps for task completion BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::then;
use tasklist::task::{domain::TaskError, services::TaskListError};

#[then("the task is complete")]
fn task_is_complete(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let task = world.stored_task()?;
    if !task.is_complete() {
        return Err(eyre::eyre!("expected task {} to be complete", task.id()));
    }
    Ok(())
}

#[then("the task summary shows completion status {status:u32}")]
fn summary_shows_status(world: &TaskListWorld, status: u32) -> Result<(), eyre::Report> {
    let task = world.stored_task()?;
    let summary = task.summary();
    let expected = format!("Completion Status: {status},");
    if !summary.contains(&expected) {
        return Err(eyre::eyre!("summary '{summary}' lacks '{expected}'"));
    }
    Ok(())
}

#[then("the change fails with an already complete error")]
fn change_fails_already_complete(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing change result"))?;
    if !matches!(result, Err(TaskListError::Mutation(TaskError::AlreadyComplete))) {
        return Err(eyre::eyre!("expected AlreadyComplete error, got {result:?}"));
    }
    Ok(())
}

#[then("the change fails with an empty description error")]
fn change_fails_empty_description(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing change result"))?;
    if !matches!(result, Err(TaskListError::Mutation(TaskError::EmptyDescription))) {
        return Err(eyre::eyre!("expected EmptyDescription error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the stored description is "{description}""#)]
fn stored_description_is(world: &TaskListWorld, description: String) -> Result<(), eyre::Report> {
    let task = world.stored_task()?;
    if task.description() != description {
        return Err(eyre::eyre!(
            "expected description '{description}', found '{}'",
            task.description()
        ));
    }
    Ok(())
}

#[then("creation fails with a construction error")]
fn creation_fails(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing creation result"))?;
    if !matches!(result, Err(TaskListError::Construction(_))) {
        return Err(eyre::eyre!("expected construction error, got {result:?}"));
    }
    Ok(())
}

#[then("the task list holds {count:usize} tasks")]
fn task_list_holds(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = world.service.list_tasks()?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}
