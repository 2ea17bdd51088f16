//! Tasklist: validated to-do tasks behind a storage-agnostic repository.
//!
//! This crate models a trackable task, guards every change to it, and defines
//! how repositories store and return tasks regardless of the backing medium.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Failure tiers
//!
//! Creating a task with an invalid description fails with
//! [`task::domain::TaskConstructionError`]; no task exists afterwards.
//! Rejected changes to a live task return [`task::domain::TaskError`] and
//! leave the task untouched. Repositories extend that vocabulary with
//! [`task::ports::TaskRepositoryError`].
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, in-memory adapter, and service

pub mod task;
