//! In-memory task collection kept in configured order.

use tracing::debug;

use crate::task::{
    domain::{SortConfig, Task, TaskId, TaskStatus, sort_tasks},
    ports::DeleteConfirmation,
};

/// Ordered set of tasks with an active title filter.
///
/// Every mutation leaves the collection fully sorted under the current
/// [`SortConfig`]. Identifiers are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
    sort: SortConfig,
    filter: String,
}

impl TaskCollection {
    /// Creates an empty collection ordered by `sort`.
    #[must_use]
    pub fn new(sort: SortConfig) -> Self {
        Self {
            tasks: Vec::new(),
            sort,
            filter: String::new(),
        }
    }

    /// Creates a collection from `tasks`.
    ///
    /// When identifiers repeat, the first occurrence wins.
    #[must_use]
    pub fn with_tasks(sort: SortConfig, tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut collection = Self::new(sort);
        for task in tasks {
            if !collection.contains(task.id()) {
                collection.tasks.push(task);
            }
        }
        collection.resort();
        collection
    }

    /// Inserts `task` unless a task with the same identifier exists.
    ///
    /// Returns `true` when the task was inserted. A duplicate leaves the
    /// collection untouched.
    pub fn add(&mut self, task: Task) -> bool {
        if self.contains(task.id()) {
            debug!(task_id = %task.id(), "ignoring task with duplicate identifier");
            return false;
        }
        self.tasks.push(task);
        self.resort();
        true
    }

    /// Replaces the task sharing `task`'s identifier, or inserts it.
    ///
    /// Returns `true` when an existing task was replaced.
    pub fn update(&mut self, task: Task) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|existing| existing.id() != task.id());
        let replaced = self.tasks.len() < before;
        self.tasks.push(task);
        self.resort();
        replaced
    }

    /// Removes the task with `id` once `confirmation` agrees.
    ///
    /// Returns `true` when a task was removed. Unknown identifiers remove
    /// nothing and are not put to the user.
    pub fn delete(&mut self, id: &TaskId, confirmation: &impl DeleteConfirmation) -> bool {
        let Some(task) = self.find(id) else {
            debug!(task_id = %id, "delete requested for unknown task");
            return false;
        };
        if !confirmation.confirm_delete(task) {
            debug!(task_id = %id, "delete declined");
            return false;
        }
        self.tasks.retain(|existing| existing.id() != id);
        true
    }

    /// Replaces the title filter.
    ///
    /// An empty filter shows every task.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        debug!(filter = %self.filter, "title filter changed");
    }

    /// Replaces the ordering and re-sorts.
    pub fn set_sort_config(&mut self, sort: SortConfig) {
        self.sort = sort;
        self.resort();
    }

    /// Returns the active title filter.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns the active ordering.
    #[must_use]
    pub const fn sort_config(&self) -> &SortConfig {
        &self.sort
    }

    /// Returns every task, ignoring the filter.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks whose title contains the filter (case-sensitive).
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(|task| task.title().contains(&self.filter))
    }

    /// Returns the visible tasks with `status`.
    pub fn visible_with_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.visible().filter(move |task| task.status() == status)
    }

    /// Counts the visible tasks with `status`.
    #[must_use]
    pub fn count_by_status(&self, status: TaskStatus) -> usize {
        self.visible_with_status(status).count()
    }

    /// Finds a task by identifier, ignoring the filter.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when a task with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.find(id).is_some()
    }

    /// Returns the number of tasks, ignoring the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn resort(&mut self) {
        sort_tasks(&mut self.tasks, &self.sort);
        debug!(tasks = self.tasks.len(), "collection re-sorted");
    }
}
