//! Clock adapter that always reports the same instant.

use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;

/// Deterministic clock for tests and replayed sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Creates a clock frozen at midday UTC on `date`.
    ///
    /// Returns `None` if the date cannot carry a midday time.
    #[must_use]
    pub fn at_midday(date: NaiveDate) -> Option<Self> {
        date.and_hms_opt(12, 0, 0)
            .map(|naive| Self::new(naive.and_utc()))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now
    }
}
