//! The basic to-do item: a description and a one-way completion flag.

use super::{
    PersistedTaskData, Task, TaskConstructionError, TaskDescription, TaskError, TaskId, TaskKind,
};
use std::fmt;

/// Standard task variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleTask {
    id: TaskId,
    description: TaskDescription,
    is_complete: bool,
}

impl SimpleTask {
    /// Creates a pending task with an unassigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskConstructionError::EmptyDescription`] when the
    /// description is empty and
    /// [`TaskConstructionError::DescriptionTooLong`] when it exceeds
    /// [`TaskDescription::MAX_CHARS`] characters.
    pub fn new(description: impl Into<String>) -> Result<Self, TaskConstructionError> {
        let text = description.into();
        if text.is_empty() {
            return Err(TaskConstructionError::EmptyDescription {
                kind: TaskKind::Simple,
            });
        }

        let length = text.chars().count();
        let description = TaskDescription::new(text).map_err(|_| {
            TaskConstructionError::DescriptionTooLong {
                kind: TaskKind::Simple,
                length,
                max: TaskDescription::MAX_CHARS,
            }
        })?;

        Ok(Self {
            id: TaskId::UNASSIGNED,
            description,
            is_complete: false,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            is_complete: data.completed,
        }
    }
}

impl Task for SimpleTask {
    fn kind(&self) -> TaskKind {
        TaskKind::Simple
    }

    fn id(&self) -> TaskId {
        self.id
    }

    fn description(&self) -> &str {
        self.description.as_str()
    }

    fn is_complete(&self) -> bool {
        self.is_complete
    }

    fn set_description(&mut self, description: String) -> Result<(), TaskError> {
        self.description = TaskDescription::new(description)?;
        Ok(())
    }

    fn mark_complete(&mut self) -> Result<(), TaskError> {
        if self.is_complete {
            return Err(TaskError::AlreadyComplete);
        }
        self.is_complete = true;
        Ok(())
    }

    fn summary(&self) -> String {
        self.to_string()
    }

    fn to_persisted(&self) -> PersistedTaskData {
        PersistedTaskData {
            kind: TaskKind::Simple,
            id: self.id,
            description: self.description.clone(),
            completed: self.is_complete,
        }
    }
}

impl fmt::Display for SimpleTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SimpleTask {{ ID: {}, Completion Status: {}, Description: {}}}",
            self.id,
            u8::from(self.is_complete),
            self.description
        )
    }
}
