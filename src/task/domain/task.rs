//! The task contract shared by every task variant, and its persisted form.

use super::{SimpleTask, TaskDescription, TaskError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability set every trackable task provides.
///
/// Callers that depend only on this trait keep working when new variants are
/// added. Repositories hand tasks back as `Box<dyn Task>`.
pub trait Task: fmt::Debug + Send + Sync {
    /// Returns the variant tag of this task.
    fn kind(&self) -> TaskKind;

    /// Returns the task identity, [`TaskId::UNASSIGNED`] until persisted.
    fn id(&self) -> TaskId;

    /// Returns the current description.
    fn description(&self) -> &str;

    /// Returns `true` once the task has been completed.
    fn is_complete(&self) -> bool;

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyDescription`] or
    /// [`TaskError::DescriptionTooLong`] and leaves the task unchanged when
    /// the new text is invalid.
    fn set_description(&mut self, description: String) -> Result<(), TaskError>;

    /// Moves the task from pending to complete.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::AlreadyComplete`] when the task is already
    /// complete. Repeated calls never succeed silently.
    fn mark_complete(&mut self) -> Result<(), TaskError>;

    /// Renders a one-line diagnostic summary of the task.
    fn summary(&self) -> String;

    /// Captures the task state for storage.
    fn to_persisted(&self) -> PersistedTaskData;
}

impl fmt::Display for dyn Task + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Closed set of task variants known to persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// A plain to-do item with a description and completion flag.
    Simple,
}

impl TaskKind {
    /// Returns the storage representation, identical to the serde tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
        }
    }

    /// Returns the human-readable variant name used in messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Simple => "Simple Task",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parameter object for storing and reconstructing a task of any variant.
///
/// The description is already validated, so rehydrating a record can never
/// produce a task that breaks the description invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTaskData {
    /// Variant tag used to pick the concrete type on rehydration.
    pub kind: TaskKind,
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted completion flag.
    pub completed: bool,
}

impl PersistedTaskData {
    /// Returns a copy of this record carrying a different identity.
    #[must_use]
    pub fn with_id(self, id: TaskId) -> Self {
        Self { id, ..self }
    }

    /// Rebuilds the concrete task this record describes.
    #[must_use]
    pub fn into_task(self) -> Box<dyn Task> {
        match self.kind {
            TaskKind::Simple => Box::new(SimpleTask::from_persisted(self)),
        }
    }
}
