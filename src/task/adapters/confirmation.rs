//! Delete confirmation adapters.

use crate::task::{
    domain::Task,
    ports::{DELETE_PROMPT, DeleteConfirmation},
};

/// Answers every confirmation request the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticConfirmation {
    answer: bool,
}

impl StaticConfirmation {
    /// Confirms every deletion.
    #[must_use]
    pub const fn always() -> Self {
        Self { answer: true }
    }

    /// Declines every deletion.
    #[must_use]
    pub const fn never() -> Self {
        Self { answer: false }
    }
}

impl DeleteConfirmation for StaticConfirmation {
    fn confirm_delete(&self, _task: &Task) -> bool {
        self.answer
    }
}

/// Delegates confirmation to a closure, typically a UI prompt.
///
/// The closure receives [`DELETE_PROMPT`] and the task about to be removed.
pub struct PromptConfirmation<F>
where
    F: Fn(&str, &Task) -> bool + Send + Sync,
{
    prompt: F,
}

impl<F> PromptConfirmation<F>
where
    F: Fn(&str, &Task) -> bool + Send + Sync,
{
    /// Wraps `prompt` as a confirmation port.
    #[must_use]
    pub const fn new(prompt: F) -> Self {
        Self { prompt }
    }
}

impl<F> DeleteConfirmation for PromptConfirmation<F>
where
    F: Fn(&str, &Task) -> bool + Send + Sync,
{
    fn confirm_delete(&self, task: &Task) -> bool {
        (self.prompt)(DELETE_PROMPT, task)
    }
}
