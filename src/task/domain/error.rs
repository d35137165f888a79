//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be blank")]
    BlankTaskId,

    /// The task title is shorter than the minimum length.
    #[error("task title has {length} characters, expected at least {min}")]
    TitleTooShort {
        /// Observed length in characters.
        length: usize,
        /// Minimum accepted length.
        min: usize,
    },

    /// The task title is longer than the maximum length.
    #[error("task title has {length} characters, expected at most {max}")]
    TitleTooLong {
        /// Observed length in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// Two sort fields share the same priority rank.
    #[error("sort fields '{first}' and '{second}' share priority rank {rank}")]
    DuplicateSortRank {
        /// Field that claimed the rank first.
        first: &'static str,
        /// Field that repeated the rank.
        second: &'static str,
        /// The shared rank.
        rank: i32,
    },
}

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing sort field names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort field: {0}")]
pub struct ParseSortFieldError(pub String);

/// Error returned while parsing sort directions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort order: {0}, expected asc or desc")]
pub struct ParseSortOrderError(pub String);
