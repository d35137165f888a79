//! Validation applied when a draft is turned into a task.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::domain::{Task, TaskData, TaskDomainError, TaskDraft, TaskTitle};

/// Whether a new task may be created with a deadline before today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlinePolicy {
    /// The deadline must be today or later.
    #[default]
    FutureOnly,
    /// Any deadline is accepted.
    Any,
}

/// Reasons a draft was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is outside the accepted length.
    #[error("invalid title: {0}")]
    InvalidTitle(TaskDomainError),

    /// The deadline lies before today.
    #[error("deadline {deadline} is before today ({today})")]
    DeadlineInPast {
        /// Requested deadline.
        deadline: NaiveDate,
        /// Current date when the draft was submitted.
        today: NaiveDate,
    },

    /// Several checks failed.
    #[error("{} validation errors", .0.len())]
    Multiple(Vec<Self>),
}

impl TaskValidationError {
    /// Combines errors, unwrapping a single entry.
    #[must_use]
    pub fn multiple(mut errors: Vec<Self>) -> Self {
        if errors.len() == 1
            && let Some(error) = errors.pop()
        {
            return error;
        }
        Self::Multiple(errors)
    }

    /// Returns the individual failures.
    #[must_use]
    pub fn errors(&self) -> Vec<&Self> {
        match self {
            Self::Multiple(errors) => errors.iter().collect(),
            other => vec![other],
        }
    }
}

/// Checks drafts before they enter a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskValidator {
    policy: DeadlinePolicy,
}

impl TaskValidator {
    /// Creates a validator applying `policy` to deadlines.
    #[must_use]
    pub const fn new(policy: DeadlinePolicy) -> Self {
        Self { policy }
    }

    /// Returns the deadline policy.
    #[must_use]
    pub const fn policy(&self) -> DeadlinePolicy {
        self.policy
    }

    /// Validates `draft` against `today` and builds the task.
    ///
    /// Every check runs; failures are reported together.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the title length is out of
    /// bounds or the deadline is before `today` under
    /// [`DeadlinePolicy::FutureOnly`].
    pub fn validate(
        &self,
        draft: &TaskDraft,
        today: NaiveDate,
    ) -> Result<Task, TaskValidationError> {
        let mut errors = Vec::new();

        let title = match TaskTitle::new(draft.title.clone()) {
            Ok(title) => Some(title),
            Err(err) => {
                errors.push(TaskValidationError::InvalidTitle(err));
                None
            }
        };

        if self.policy == DeadlinePolicy::FutureOnly && draft.deadline < today {
            errors.push(TaskValidationError::DeadlineInPast {
                deadline: draft.deadline,
                today,
            });
        }

        match title {
            Some(valid_title) if errors.is_empty() => Ok(Task::from_data(TaskData {
                id: draft.id.clone(),
                title: valid_title,
                deadline: draft.deadline,
                priority: draft.priority,
                status: draft.status,
            })),
            _ => Err(TaskValidationError::multiple(errors)),
        }
    }
}
