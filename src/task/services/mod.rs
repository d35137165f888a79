//! Application services for the task list.
//!
//! [`TaskBoard`] is the composition root: it owns a [`TaskCollection`] and
//! the collaborators needed to create and delete tasks.

mod board;
mod collection;
mod config;
mod creation;

pub use board::TaskBoard;
pub use collection::TaskCollection;
pub use config::BoardConfig;
pub use creation::{DeadlinePolicy, TaskValidationError, TaskValidator};
