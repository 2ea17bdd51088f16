//! Service layer for creating, changing, and querying tasks.

use crate::task::{
    domain::{SimpleTask, Task, TaskConstructionError, TaskError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for task list operations.
///
/// Each tier of failure keeps its own variant so callers can still tell a
/// task that was never created apart from a rejected change.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// The task could not be constructed.
    #[error(transparent)]
    Construction(#[from] TaskConstructionError),
    /// The task rejected the requested change.
    #[error(transparent)]
    Mutation(#[from] TaskError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task list service operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Task list orchestration service.
#[derive(Debug)]
pub struct TaskListService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskListService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskListService<R>
where
    R: TaskRepository,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a simple task and persists it.
    ///
    /// Returns the stored task, carrying its repository-assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Construction`] when the description is
    /// invalid, or [`TaskListError::Repository`] when storage fails.
    pub fn create_task(&self, description: impl Into<String>) -> TaskListResult<Box<dyn Task>> {
        let task = SimpleTask::new(description)?;
        let id = self.repository.add_task(&task)?;
        info!(task_id = %id, "created task");
        self.load(id)
    }

    /// Replaces the description of a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Mutation`] when the new description is
    /// rejected, or [`TaskListError::Repository`] when the task does not
    /// exist or storage fails.
    pub fn rename_task(
        &self,
        id: TaskId,
        description: impl Into<String>,
    ) -> TaskListResult<Box<dyn Task>> {
        self.modify(id, |task| task.set_description(description.into()))
    }

    /// Marks a stored task as complete.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Mutation`] with [`TaskError::AlreadyComplete`]
    /// when the task was already complete, or [`TaskListError::Repository`]
    /// when the task does not exist or storage fails.
    pub fn complete_task(&self, id: TaskId) -> TaskListResult<Box<dyn Task>> {
        self.modify(id, |task| task.mark_complete())
    }

    /// Removes a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when the task does not exist or
    /// storage fails.
    pub fn remove_task(&self, id: TaskId) -> TaskListResult<()> {
        self.repository.delete_task(id)?;
        info!(task_id = %id, "removed task");
        Ok(())
    }

    /// Returns every stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when storage fails.
    pub fn list_tasks(&self) -> TaskListResult<Vec<Box<dyn Task>>> {
        Ok(self.repository.all_tasks()?)
    }

    /// Finds a task by identity.
    ///
    /// Returns `Ok(None)` when no task has the identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when storage fails.
    pub fn find_task(&self, id: TaskId) -> TaskListResult<Option<Box<dyn Task>>> {
        Ok(self.repository.find_by_id(id)?)
    }

    fn load(&self, id: TaskId) -> TaskListResult<Box<dyn Task>> {
        self.repository
            .find_by_id(id)?
            .ok_or(TaskListError::Repository(TaskRepositoryError::NotFound(id)))
    }

    fn modify<F>(&self, id: TaskId, change: F) -> TaskListResult<Box<dyn Task>>
    where
        F: FnOnce(&mut dyn Task) -> Result<(), TaskError>,
    {
        let mut task = self.load(id)?;
        if let Err(err) = change(task.as_mut()) {
            warn!(task_id = %id, error = %err, "task change rejected");
            return Err(err.into());
        }
        self.repository.update_task(task.as_ref())?;
        info!(task_id = %id, completed = task.is_complete(), "updated task");
        Ok(task)
    }
}
