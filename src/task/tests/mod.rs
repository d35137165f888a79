//! Unit tests for the task list.

mod support;
