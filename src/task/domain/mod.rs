//! Domain model for the task list.
//!
//! Tasks, their validated scalars, and the configuration-driven ordering
//! that keeps a collection sorted. Nothing here touches clocks, prompts or
//! rendering; those live behind ports.

mod error;
mod ids;
mod ordering;
mod sort;
mod task;

pub use error::{
    ParseSortFieldError, ParseSortOrderError, ParseTaskPriorityError, ParseTaskStatusError,
    TaskDomainError,
};
pub use ids::{TaskId, TaskTitle};
pub use ordering::{compare, is_sorted, sort_tasks};
pub use sort::{SortConfig, SortField, SortKey, SortOrder, SortRule};
pub use task::{Task, TaskData, TaskDraft, TaskPriority, TaskStatus, calendar_date};
