//! Repository port for task persistence and identity-keyed lookup.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Storage-agnostic task persistence contract.
///
/// Implementations own identity assignment: every identity they hand out is
/// unique within the repository and never equal to [`TaskId::UNASSIGNED`].
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns the identity assigned to it.
    ///
    /// Any identity already carried by `task` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::IdentityExhausted`] when no fresh
    /// identity remains, or [`TaskRepositoryError::Persistence`] when the
    /// backing store fails.
    fn add_task(&self, task: &dyn Task) -> TaskRepositoryResult<TaskId>;

    /// Replaces the stored task sharing `task`'s identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has that
    /// identity and [`TaskRepositoryError::CompletionReverted`] when the
    /// stored task is complete but `task` is pending.
    fn update_task(&self, task: &dyn Task) -> TaskRepositoryResult<()>;

    /// Removes the task with the given identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has that
    /// identity.
    fn delete_task(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns every stored task. Ordering is implementation-defined.
    fn all_tasks(&self) -> TaskRepositoryResult<Vec<Box<dyn Task>>>;

    /// Finds a task by identity.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Box<dyn Task>>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No task with the identity exists.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// An update would move a complete task back to pending.
    #[error("task {0} is complete and cannot be reopened")]
    CompletionReverted(TaskId),

    /// The repository has handed out every identity it can represent.
    #[error("task identity space exhausted")]
    IdentityExhausted,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
