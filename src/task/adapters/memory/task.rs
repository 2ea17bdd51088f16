//! In-memory task repository.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identities are issued from a counter starting at 1 and are never reused,
/// even after the task holding them is deleted. [`TaskRepository::all_tasks`]
/// yields tasks in ascending identity order. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, PersistedTaskData>,
    next_id: Option<TaskId>,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: Some(FIRST_ID),
        }
    }
}

const FIRST_ID: TaskId = TaskId::new(1);

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository whose first issued identity is `first_id`.
    ///
    /// [`TaskId::UNASSIGNED`] is never issued; passing it starts at 1.
    #[must_use]
    pub fn starting_at(first_id: TaskId) -> Self {
        let state = InMemoryTaskState {
            tasks: BTreeMap::new(),
            next_id: Some(first_id.max(FIRST_ID)),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the state lock is
    /// poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read_state()?.tasks.len())
    }

    /// Returns `true` when no tasks are stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the state lock is
    /// poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.read_state()?.tasks.is_empty())
    }

    fn read_state(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn add_task(&self, task: &dyn Task) -> TaskRepositoryResult<TaskId> {
        let mut state = self.write_state()?;
        let id = state.next_id.ok_or(TaskRepositoryError::IdentityExhausted)?;
        state.next_id = id.next();

        let record = task.to_persisted().with_id(id);
        state.tasks.insert(id, record);
        debug!(task_id = %id, kind = task.kind().as_str(), "stored task");
        Ok(id)
    }

    fn update_task(&self, task: &dyn Task) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        let id = task.id();
        let stored = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;

        if stored.completed && !task.is_complete() {
            return Err(TaskRepositoryError::CompletionReverted(id));
        }

        *stored = task.to_persisted().with_id(id);
        debug!(task_id = %id, completed = stored.completed, "updated task");
        Ok(())
    }

    fn delete_task(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        debug!(task_id = %id, "deleted task");
        Ok(())
    }

    fn all_tasks(&self) -> TaskRepositoryResult<Vec<Box<dyn Task>>> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .values()
            .cloned()
            .map(PersistedTaskData::into_task)
            .collect())
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Box<dyn Task>>> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .get(&id)
            .cloned()
            .map(PersistedTaskData::into_task))
    }
}
