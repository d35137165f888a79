//! Confirmation port consulted before a task is removed.

use crate::task::domain::Task;

/// Asks the user whether a task may be deleted.
///
/// Implementations block until an answer is available. Declining is not an
/// error; the caller simply leaves the collection unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait DeleteConfirmation: Send + Sync {
    /// Returns `true` when the user agrees to delete `task`.
    fn confirm_delete(&self, task: &Task) -> bool;
}

/// Prompt shown by interactive confirmation adapters.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task ?";
