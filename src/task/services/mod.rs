//! Application services for task list orchestration.

mod task_list;

pub use task_list::{TaskListError, TaskListResult, TaskListService};
