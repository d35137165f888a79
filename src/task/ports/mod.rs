//! Port contracts for the task list.
//!
//! Ports define the collaborators the services need without tying them to
//! a particular UI or data format.

pub mod confirmation;
pub mod source;

pub use confirmation::{DELETE_PROMPT, DeleteConfirmation};
pub use source::{TaskSource, TaskSourceError, TaskSourceResult};

#[cfg(test)]
pub use confirmation::MockDeleteConfirmation;
