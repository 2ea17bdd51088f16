//! Step definitions for task completion BDD scenarios.

pub mod then;
