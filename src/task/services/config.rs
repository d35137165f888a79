//! Board configuration.

use serde::{Deserialize, Serialize};

use super::creation::DeadlinePolicy;
use crate::task::domain::SortConfig;

/// Settings a [`super::TaskBoard`] starts with.
///
/// # Examples
///
/// ```
/// use tasklist::task::services::{BoardConfig, DeadlinePolicy};
///
/// let config = BoardConfig::default();
/// assert_eq!(config.deadline_policy, DeadlinePolicy::FutureOnly);
///
/// let lenient = BoardConfig::lenient();
/// assert_eq!(lenient.deadline_policy, DeadlinePolicy::Any);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Ordering applied to the collection.
    pub sort: SortConfig,
    /// Deadline rule applied when tasks are created.
    pub deadline_policy: DeadlinePolicy,
}

impl BoardConfig {
    /// Creates a configuration that accepts past deadlines.
    ///
    /// Useful when importing tasks that are already overdue.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            deadline_policy: DeadlinePolicy::Any,
            ..Default::default()
        }
    }

    /// Parses a configuration from JSON; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the payload is malformed or the
    /// sort configuration repeats a precedence rank.
    pub fn from_json_str(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}
