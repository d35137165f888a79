//! Multi-key task ordering driven by a [`SortConfig`].

use super::{SortConfig, SortField, SortOrder, Task};
use std::cmp::Ordering;

/// Compares two tasks under `config`.
///
/// Fields are consulted from the highest precedence rank down; the first
/// field on which the tasks differ decides, with `desc` reversing that
/// field's result. Tasks equal on every configured field compare `Equal`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use std::cmp::Ordering;
/// use tasklist::task::domain::{
///     SortConfig, Task, TaskData, TaskId, TaskPriority, TaskStatus, TaskTitle, compare,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let task = |id: &str, day: u32| -> Result<Task, Box<dyn std::error::Error>> {
///     Ok(Task::from_data(TaskData {
///         id: TaskId::from_raw(id)?,
///         title: TaskTitle::new("Water plants")?,
///         deadline: NaiveDate::from_ymd_opt(2024, 1, day).ok_or("bad date")?,
///         priority: TaskPriority::Low,
///         status: TaskStatus::Todo,
///     }))
/// };
/// let early = task("a", 5)?;
/// let late = task("b", 10)?;
/// assert_eq!(compare(&early, &late, &SortConfig::default()), Ordering::Less);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn compare(a: &Task, b: &Task, config: &SortConfig) -> Ordering {
    config
        .keys()
        .iter()
        .map(|key| directed(compare_field(a, b, key.field), key.order))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sorts `tasks` in place under `config`.
///
/// The sort is stable, so tasks that compare `Equal` keep their relative
/// order.
pub fn sort_tasks(tasks: &mut [Task], config: &SortConfig) {
    tasks.sort_by(|a, b| compare(a, b, config));
}

/// Returns `true` when `tasks` is already ordered under `config`.
#[must_use]
pub fn is_sorted(tasks: &[Task], config: &SortConfig) -> bool {
    tasks
        .windows(2)
        .all(|pair| matches!(pair, [a, b] if compare(a, b, config).is_le()))
}

fn compare_field(a: &Task, b: &Task, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id().cmp(b.id()),
        SortField::Deadline => a.deadline().cmp(&b.deadline()),
        SortField::Priority => a.priority().cmp(&b.priority()),
        SortField::Title => a.title().cmp_ignore_case(b.title()),
        SortField::Status => a.status().cmp(&b.status()),
    }
}

const fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
