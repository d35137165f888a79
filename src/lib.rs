//! Tasklist: an in-memory to-do list core.
//!
//! This crate keeps a list of tasks (title, deadline, priority, status)
//! sorted by a configurable multi-key ordering, filters it by title, and
//! validates new tasks before they are accepted. It holds no UI; form and
//! list widgets call into [`task::services::TaskBoard`].
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: tasks, sort configuration and the ordering function
//! - **Ports**: delete confirmation and seed data contracts
//! - **Adapters**: clocks, confirmations, JSON seed data, text rendering
//! - **Services**: creation checks, the collection and the board
//!
//! # Modules
//!
//! - [`task`]: the task list

pub mod task;
