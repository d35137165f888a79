//! Task entity and its enumerated attributes.

use super::{ParseTaskPriorityError, ParseTaskStatusError, TaskId, TaskTitle};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance of a task.
///
/// Variants are declared in ascending order so the derived [`Ord`] matches
/// the ordinal `low < medium < high`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Default importance for new tasks.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl TaskPriority {
    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion status of a task.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work remains.
    #[default]
    Todo,
    /// Work is complete.
    Done,
}

impl TaskStatus {
    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduces a timestamp to its UTC calendar date.
#[must_use]
pub fn calendar_date(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

/// A task accepted into a collection.
///
/// The title is always within bounds. The deadline is a plain calendar
/// date and is not required to lie in the future.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    deadline: NaiveDate,
    priority: TaskPriority,
    status: TaskStatus,
}

/// Parameter object for assembling a task from already validated parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Validated title.
    pub title: TaskTitle,
    /// Calendar deadline.
    pub deadline: NaiveDate,
    /// Task importance.
    pub priority: TaskPriority,
    /// Completion status.
    pub status: TaskStatus,
}

impl Task {
    /// Assembles a task from validated parts.
    #[must_use]
    pub fn from_data(data: TaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            deadline: data.deadline,
            priority: data.priority,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Returns the task importance.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns a copy with the title replaced.
    #[must_use]
    pub fn with_title(self, title: TaskTitle) -> Self {
        Self { title, ..self }
    }

    /// Returns a copy with the deadline replaced.
    #[must_use]
    pub fn with_deadline(self, deadline: NaiveDate) -> Self {
        Self { deadline, ..self }
    }

    /// Returns a copy with the priority replaced.
    #[must_use]
    pub fn with_priority(self, priority: TaskPriority) -> Self {
        Self { priority, ..self }
    }

    /// Returns a copy with the status replaced.
    #[must_use]
    pub fn with_status(self, status: TaskStatus) -> Self {
        Self { status, ..self }
    }
}

/// Unvalidated task form state.
///
/// A draft carries its identifier from the moment it is created so that
/// resubmitting the same draft cannot insert the task twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Identifier the task will keep once accepted.
    pub id: TaskId,
    /// Raw title as typed.
    pub title: String,
    /// Requested deadline.
    pub deadline: NaiveDate,
    /// Requested importance.
    pub priority: TaskPriority,
    /// Initial status.
    pub status: TaskStatus,
}

impl TaskDraft {
    /// Creates a draft with a fresh identifier and `todo` status.
    #[must_use]
    pub fn new(title: impl Into<String>, deadline: NaiveDate, priority: TaskPriority) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            deadline,
            priority,
            status: TaskStatus::Todo,
        }
    }

    /// Sets the deadline from a timestamp, keeping only its UTC date.
    #[must_use]
    pub fn with_deadline_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.deadline = calendar_date(timestamp);
        self
    }
}
