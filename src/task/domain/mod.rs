//! Domain model for trackable tasks.
//!
//! The domain defines the [`Task`] contract, its one concrete variant
//! [`SimpleTask`], and the two failure tiers: [`TaskConstructionError`] for
//! tasks that never came into being and [`TaskError`] for rejected changes to
//! live tasks. Nothing here performs I/O.

mod error;
mod ids;
mod simple_task;
mod task;

pub use error::{TaskConstructionError, TaskError};
pub use ids::{TaskDescription, TaskId};
pub use simple_task::SimpleTask;
pub use task::{PersistedTaskData, Task, TaskKind};
