//! Sort configuration: per-field direction and precedence rank.

use super::{ParseSortFieldError, ParseSortOrderError, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Task attribute that can take part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Opaque task identifier.
    Id,
    /// Calendar deadline.
    Deadline,
    /// Task importance.
    Priority,
    /// Case-insensitive title.
    Title,
    /// Completion status.
    Status,
}

impl SortField {
    /// Every sortable field.
    pub const ALL: [Self; 5] = [
        Self::Id,
        Self::Deadline,
        Self::Priority,
        Self::Title,
        Self::Status,
    ];

    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Deadline => "deadline",
            Self::Priority => "priority",
            Self::Title => "title",
            Self::Status => "status",
        }
    }
}

impl TryFrom<&str> for SortField {
    type Error = ParseSortFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ParseSortFieldError(value.to_owned()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of comparison for one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = ParseSortOrderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseSortOrderError(value.to_owned())),
        }
    }
}

/// Direction and precedence rank of one sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortRule {
    /// Direction of comparison.
    pub order: SortOrder,
    /// Precedence rank; higher ranks are consulted first.
    pub priority: i32,
}

impl SortRule {
    /// Creates an ascending rule with the given rank.
    #[must_use]
    pub const fn asc(priority: i32) -> Self {
        Self {
            order: SortOrder::Asc,
            priority,
        }
    }

    /// Creates a descending rule with the given rank.
    #[must_use]
    pub const fn desc(priority: i32) -> Self {
        Self {
            order: SortOrder::Desc,
            priority,
        }
    }
}

/// One step of a resolved comparison chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// Field compared at this step.
    pub field: SortField,
    /// Direction applied to the comparison.
    pub order: SortOrder,
}

/// Mapping from sort field to rule, with the comparison chain resolved.
///
/// Ranks are unique across fields, so the chain is totally ordered. Fields
/// absent from the mapping are never consulted.
///
/// # Examples
///
/// ```
/// use tasklist::task::domain::{SortConfig, SortField};
///
/// let config = SortConfig::default();
/// let chain: Vec<SortField> = config.keys().iter().map(|key| key.field).collect();
/// assert_eq!(
///     chain,
///     [
///         SortField::Deadline,
///         SortField::Priority,
///         SortField::Title,
///         SortField::Status,
///         SortField::Id,
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<SortField, SortRule>",
    into = "BTreeMap<SortField, SortRule>"
)]
pub struct SortConfig {
    rules: BTreeMap<SortField, SortRule>,
    keys: Vec<SortKey>,
}

impl SortConfig {
    /// Builds a configuration from field rules.
    ///
    /// A field listed twice keeps its last rule.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateSortRank`] when two fields share
    /// a precedence rank.
    pub fn new(
        entries: impl IntoIterator<Item = (SortField, SortRule)>,
    ) -> Result<Self, TaskDomainError> {
        let rules: BTreeMap<SortField, SortRule> = entries.into_iter().collect();
        let mut ranked: Vec<(SortField, SortRule)> =
            rules.iter().map(|(field, rule)| (*field, *rule)).collect();
        ranked.sort_by(|(_, left), (_, right)| right.priority.cmp(&left.priority));

        for pair in ranked.windows(2) {
            if let [(first, first_rule), (second, second_rule)] = pair
                && first_rule.priority == second_rule.priority
            {
                return Err(TaskDomainError::DuplicateSortRank {
                    first: first.as_str(),
                    second: second.as_str(),
                    rank: first_rule.priority,
                });
            }
        }

        let keys = ranked
            .into_iter()
            .map(|(field, rule)| SortKey {
                field,
                order: rule.order,
            })
            .collect();
        Ok(Self { rules, keys })
    }

    /// Two-key ordering: earliest deadline first, then title, with the
    /// identifier as a final deterministic tie-break.
    #[must_use]
    pub fn deadline_then_title() -> Self {
        Self::from_unique_ranks([
            (SortField::Deadline, SortRule::asc(2)),
            (SortField::Title, SortRule::asc(1)),
            (SortField::Id, SortRule::asc(0)),
        ])
    }

    /// Returns the rule configured for `field`, if any.
    #[must_use]
    pub fn rule(&self, field: SortField) -> Option<SortRule> {
        self.rules.get(&field).copied()
    }

    /// Returns the comparison chain, highest rank first.
    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Builds a configuration from rules whose ranks are known to be
    /// distinct.
    fn from_unique_ranks<const N: usize>(rules: [(SortField, SortRule); N]) -> Self {
        let mut ranked = rules;
        ranked.sort_by(|(_, left), (_, right)| right.priority.cmp(&left.priority));
        Self {
            rules: ranked.iter().copied().collect(),
            keys: ranked
                .iter()
                .map(|(field, rule)| SortKey {
                    field: *field,
                    order: rule.order,
                })
                .collect(),
        }
    }
}

impl Default for SortConfig {
    /// Deadline, then priority (high first), then title, status and id.
    fn default() -> Self {
        Self::from_unique_ranks([
            (SortField::Id, SortRule::asc(0)),
            (SortField::Deadline, SortRule::asc(4)),
            (SortField::Priority, SortRule::desc(3)),
            (SortField::Title, SortRule::asc(2)),
            (SortField::Status, SortRule::asc(1)),
        ])
    }
}

impl TryFrom<BTreeMap<SortField, SortRule>> for SortConfig {
    type Error = TaskDomainError;

    fn try_from(value: BTreeMap<SortField, SortRule>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SortConfig> for BTreeMap<SortField, SortRule> {
    fn from(value: SortConfig) -> Self {
        value.rules
    }
}
