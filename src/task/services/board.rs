//! Application context owning the task list and its collaborators.

use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

use super::{
    collection::TaskCollection,
    config::BoardConfig,
    creation::{DeadlinePolicy, TaskValidationError, TaskValidator},
};
use crate::task::{
    domain::{SortConfig, Task, TaskDraft, TaskId, TaskPriority, TaskStatus, calendar_date},
    ports::{DeleteConfirmation, TaskSource, TaskSourceResult},
};

/// Single owner of the task list state.
///
/// The board bundles the collection with the clock used for creation checks
/// and the port consulted before deletions. UI layers call these operations
/// in response to events; each runs to completion.
#[derive(Clone)]
pub struct TaskBoard<C, D>
where
    C: Clock,
    D: DeleteConfirmation,
{
    collection: TaskCollection,
    validator: TaskValidator,
    clock: Arc<C>,
    confirmation: Arc<D>,
}

impl<C, D> TaskBoard<C, D>
where
    C: Clock,
    D: DeleteConfirmation,
{
    /// Creates an empty board.
    #[must_use]
    pub fn new(config: BoardConfig, clock: Arc<C>, confirmation: Arc<D>) -> Self {
        Self {
            collection: TaskCollection::new(config.sort),
            validator: TaskValidator::new(config.deadline_policy),
            clock,
            confirmation,
        }
    }

    /// Creates a board holding the tasks loaded from `source`.
    ///
    /// Seed tasks skip creation checks. Repeated identifiers keep their
    /// first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::ports::TaskSourceError`] when the source
    /// cannot be loaded.
    pub fn seeded(
        source: &impl TaskSource,
        config: BoardConfig,
        clock: Arc<C>,
        confirmation: Arc<D>,
    ) -> TaskSourceResult<Self> {
        let tasks = source.load()?;
        let loaded = tasks.len();
        let board = Self {
            collection: TaskCollection::with_tasks(config.sort, tasks),
            validator: TaskValidator::new(config.deadline_policy),
            clock,
            confirmation,
        };
        info!(loaded, kept = board.collection.len(), "board seeded");
        Ok(board)
    }

    /// Returns the current date according to the board clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        calendar_date(self.clock.utc())
    }

    /// Starts a new task with a fresh identifier and `todo` status.
    #[must_use]
    pub fn create_task(
        &self,
        title: impl Into<String>,
        deadline: NaiveDate,
        priority: TaskPriority,
    ) -> TaskDraft {
        TaskDraft::new(title, deadline, priority)
    }

    /// Checks `draft` against today's date without touching the list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] describing every failed check.
    pub fn validate_draft(&self, draft: &TaskDraft) -> Result<Task, TaskValidationError> {
        self.validator.validate(draft, self.today())
    }

    /// Validates `draft` and adds the resulting task.
    ///
    /// Returns `false` when validation fails or a task with the draft's
    /// identifier already exists; the list is unchanged in both cases.
    pub fn submit_task(&mut self, draft: &TaskDraft) -> bool {
        match self.validate_draft(draft) {
            Ok(task) => {
                let id = task.id().clone();
                let added = self.collection.add(task);
                if added {
                    info!(task_id = %id, "task created");
                }
                added
            }
            Err(err) => {
                debug!(task_id = %draft.id, error = %err, "draft rejected");
                false
            }
        }
    }

    /// Removes the task with `id` after confirmation.
    ///
    /// Returns `true` when a task was removed.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let removed = self.collection.delete(id, &*self.confirmation);
        if removed {
            info!(task_id = %id, "task deleted");
        }
        removed
    }

    /// Replaces the task sharing `task`'s identifier, or inserts it.
    ///
    /// The deadline is not checked against today. Returns `true` when an
    /// existing task was replaced.
    pub fn update_task(&mut self, task: Task) -> bool {
        let task_id = task.id().clone();
        let replaced = self.collection.update(task);
        if replaced {
            info!(task_id = %task_id, "task updated");
        } else {
            info!(task_id = %task_id, "task inserted by update");
        }
        replaced
    }

    /// Sets the title filter and returns the matching tasks in order.
    pub fn filter_by_title(&mut self, text: impl Into<String>) -> Vec<Task> {
        self.collection.set_filter(text);
        self.visible()
    }

    /// Counts the visible tasks with `status`.
    #[must_use]
    pub fn count_tasks_by_status(&self, status: TaskStatus) -> usize {
        self.collection.count_by_status(status)
    }

    /// Returns the deadline policy applied when submitting drafts.
    #[must_use]
    pub const fn deadline_policy(&self) -> DeadlinePolicy {
        self.validator.policy()
    }

    /// Replaces the ordering and re-sorts.
    pub fn set_sort_config(&mut self, sort: SortConfig) {
        self.collection.set_sort_config(sort);
    }

    /// Returns the visible tasks in order.
    #[must_use]
    pub fn visible(&self) -> Vec<Task> {
        self.collection.visible().cloned().collect()
    }

    /// Returns every task in order, ignoring the filter.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.collection.tasks()
    }

    /// Returns the underlying collection.
    #[must_use]
    pub const fn collection(&self) -> &TaskCollection {
        &self.collection
    }
}
