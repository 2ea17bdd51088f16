//! Identifier and validated scalar types for the task domain.

use super::TaskError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository-assigned identity of a task.
///
/// Freshly constructed tasks carry [`TaskId::UNASSIGNED`] until a repository
/// persists them and hands back a real identity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Placeholder identity held by tasks that have not been persisted.
    pub const UNASSIGNED: Self = Self(0);

    /// Creates a task identifier from its raw numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns `true` once a repository has assigned this identity.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != Self::UNASSIGNED.0
    }

    /// Returns the identity following this one, or `None` on overflow.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated task description: non-empty and at most
/// [`TaskDescription::MAX_CHARS`] characters.
///
/// Length is counted in Unicode scalar values. Whitespace is significant and
/// never trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Largest number of characters a description may hold.
    pub const MAX_CHARS: usize = 255;

    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyDescription`] for empty text, or
    /// [`TaskError::DescriptionTooLong`] when the text exceeds
    /// [`Self::MAX_CHARS`] characters. Emptiness is checked first.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskError> {
        let text = value.into();
        if text.is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        if text.chars().count() > Self::MAX_CHARS {
            return Err(TaskError::DescriptionTooLong);
        }
        Ok(Self(text))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskDescription {
    type Error = TaskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskDescription> for String {
    fn from(value: TaskDescription) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
