//! Source port for the tasks a board starts with.

use crate::task::domain::{Task, TaskDomainError};
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Supplies the initial task list.
pub trait TaskSource: Send + Sync {
    /// Loads every task the source holds, in source order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the source cannot be decoded.
    fn load(&self) -> TaskSourceResult<Vec<Task>>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Error)]
pub enum TaskSourceError {
    /// The payload is not valid task data.
    #[error("malformed task data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record decoded but failed domain validation.
    #[error("invalid task record at index {index}: {source}")]
    InvalidRecord {
        /// Zero-based position of the record.
        index: usize,
        /// Domain validation failure.
        source: TaskDomainError,
    },
}
