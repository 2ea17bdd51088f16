//! Task tracking for the task list.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]: the [`domain::Task`] contract, the
//!   [`domain::SimpleTask`] variant, and the construction/mutation error tiers
//! - Port contracts in [`ports`]: the storage-agnostic
//!   [`ports::TaskRepository`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
