//! Adapter implementations for the task list ports.

pub mod clock;
pub mod confirmation;
pub mod json;
pub mod text;
