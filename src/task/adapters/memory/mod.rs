//! In-memory adapter implementations.
//!
//! These adapters keep tasks in process memory and are suitable for tests
//! and embedders that do not need durability.

mod task;

pub use task::InMemoryTaskRepository;
