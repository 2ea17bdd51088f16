//! Repository contract tests run through a `dyn TaskRepository` handle.

use std::collections::HashSet;

use super::helpers::{load, simple_task};
use rstest::{fixture, rstest};
use tasklist::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

#[fixture]
fn repository() -> Box<dyn TaskRepository> {
    Box::new(InMemoryTaskRepository::new())
}

#[rstest]
fn added_task_matches_state_at_insertion(
    repository: Box<dyn TaskRepository>,
) -> Result<(), eyre::Report> {
    let mut task = simple_task("Renew passport")?;
    task.mark_complete()?;

    let id = repository.add_task(&task)?;
    task.set_description("Changed after insertion".to_owned())?;

    let stored = load(repository.as_ref(), id)?;
    eyre::ensure!(stored.description() == "Renew passport");
    eyre::ensure!(stored.is_complete());
    eyre::ensure!(stored.id() == id);
    Ok(())
}

#[rstest]
fn identities_are_unique_and_assigned(
    repository: Box<dyn TaskRepository>,
) -> Result<(), eyre::Report> {
    let mut seen = HashSet::new();
    for n in 0..20 {
        let id = repository.add_task(&simple_task(&format!("Task {n}"))?)?;
        eyre::ensure!(id != TaskId::UNASSIGNED, "zero must never be issued");
        eyre::ensure!(seen.insert(id), "identity {id} issued twice");
    }
    Ok(())
}

#[rstest]
fn absence_is_not_a_failure(repository: Box<dyn TaskRepository>) -> Result<(), eyre::Report> {
    eyre::ensure!(repository.find_by_id(TaskId::new(1))?.is_none());
    eyre::ensure!(repository.all_tasks()?.is_empty());
    Ok(())
}

#[rstest]
fn update_and_delete_of_unknown_identity_are_not_found(
    repository: Box<dyn TaskRepository>,
) -> Result<(), eyre::Report> {
    let never_added = simple_task("Ghost")?;

    let update = repository.update_task(&never_added);
    let delete = repository.delete_task(TaskId::new(999));

    eyre::ensure!(matches!(update, Err(TaskRepositoryError::NotFound(_))));
    eyre::ensure!(matches!(delete, Err(TaskRepositoryError::NotFound(_))));
    Ok(())
}

#[rstest]
fn all_tasks_reflects_updates_and_deletes(
    repository: Box<dyn TaskRepository>,
) -> Result<(), eyre::Report> {
    let keep = repository.add_task(&simple_task("Keep")?)?;
    let discard = repository.add_task(&simple_task("Drop")?)?;

    let mut handle = load(repository.as_ref(), keep)?;
    handle.mark_complete()?;
    repository.update_task(handle.as_ref())?;
    repository.delete_task(discard)?;

    let remaining = repository.all_tasks()?;
    eyre::ensure!(remaining.len() == 1);
    let only = remaining
        .first()
        .ok_or_else(|| eyre::eyre!("expected one task"))?;
    eyre::ensure!(only.id() == keep);
    eyre::ensure!(only.is_complete());
    Ok(())
}

#[rstest]
fn rendering_reflects_assigned_identity(
    repository: Box<dyn TaskRepository>,
) -> Result<(), eyre::Report> {
    let id = repository.add_task(&simple_task("Buy milk")?)?;

    let stored = load(repository.as_ref(), id)?;

    eyre::ensure!(
        stored.to_string() == format!("SimpleTask {{ ID: {id}, Completion Status: 0, Description: Buy milk}}")
    );
    Ok(())
}
