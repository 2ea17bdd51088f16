//! Error types for task construction and guarded task mutation.

use super::TaskKind;
use thiserror::Error;

/// Recoverable failures returned by guarded task mutators.
///
/// A task that reports one of these errors is left exactly as it was before
/// the call.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum TaskError {
    /// The replacement description was empty.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The replacement description exceeded the character limit.
    #[error("task description exceeds 255 characters")]
    DescriptionTooLong,

    /// Completion was requested on a task that is already complete.
    #[error("task is already complete")]
    AlreadyComplete,
}

/// Unrecoverable failure raised while creating a task.
///
/// No task value exists when this error is returned, so it is kept apart from
/// [`TaskError`], which always describes a rejected change to a live task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskConstructionError {
    /// The initial description was empty.
    #[error("{kind} Error: Description must not be empty.")]
    EmptyDescription {
        /// Variant that refused to be constructed.
        kind: TaskKind,
    },

    /// The initial description exceeded the character limit.
    #[error("{kind} Error: Description must not exceed {max} characters (got {length}).")]
    DescriptionTooLong {
        /// Variant that refused to be constructed.
        kind: TaskKind,
        /// Character count of the rejected description.
        length: usize,
        /// Maximum accepted character count.
        max: usize,
    },
}

impl TaskConstructionError {
    /// Returns the variant whose construction failed.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        match self {
            Self::EmptyDescription { kind } | Self::DescriptionTooLong { kind, .. } => *kind,
        }
    }
}
