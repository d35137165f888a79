//! JSON-backed task source.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::task::{
    domain::{Task, TaskData, TaskId, TaskPriority, TaskStatus, TaskTitle},
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};

/// Task source reading a JSON array of task records.
///
/// Each record carries `id`, `title`, `deadline` (`YYYY-MM-DD`),
/// `priority` and an optional `status` defaulting to `todo`.
///
/// # Examples
///
/// ```
/// use tasklist::task::adapters::json::JsonTaskSource;
/// use tasklist::task::ports::TaskSource;
///
/// let source = JsonTaskSource::new(
///     r#"[{"id": "1", "title": "Buy milk", "deadline": "2024-01-10", "priority": "low"}]"#,
/// );
/// let tasks = source.load().expect("valid seed data");
/// assert_eq!(tasks.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTaskSource {
    payload: String,
}

impl JsonTaskSource {
    /// Creates a source over a JSON payload.
    #[must_use]
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TaskRecord {
    id: String,
    title: String,
    deadline: NaiveDate,
    priority: TaskPriority,
    #[serde(default)]
    status: TaskStatus,
}

impl TaskRecord {
    fn into_task(self, index: usize) -> TaskSourceResult<Task> {
        let invalid = |source| TaskSourceError::InvalidRecord { index, source };
        Ok(Task::from_data(TaskData {
            id: TaskId::from_raw(self.id).map_err(invalid)?,
            title: TaskTitle::new(self.title).map_err(invalid)?,
            deadline: self.deadline,
            priority: self.priority,
            status: self.status,
        }))
    }
}

impl TaskSource for JsonTaskSource {
    fn load(&self) -> TaskSourceResult<Vec<Task>> {
        let records: Vec<TaskRecord> = serde_json::from_str(&self.payload)?;
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_task(index))
            .collect()
    }
}
