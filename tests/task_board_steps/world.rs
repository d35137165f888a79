//! Shared world state for task board BDD scenarios.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{NaiveDate, NaiveTime};
use rstest::fixture;
use tasklist::task::{
    adapters::clock::FixedClock,
    domain::{Task, TaskDraft},
    ports::DeleteConfirmation,
    services::{BoardConfig, TaskBoard},
};

/// Confirmation whose answer a scenario can change.
#[derive(Debug)]
pub struct ScenarioConfirmation {
    answer: AtomicBool,
}

impl ScenarioConfirmation {
    /// Makes every later prompt answer `answer`.
    pub fn answer_with(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }
}

impl DeleteConfirmation for ScenarioConfirmation {
    fn confirm_delete(&self, _task: &Task) -> bool {
        self.answer.load(Ordering::SeqCst)
    }
}

/// Board type used by the BDD world.
pub type TestTaskBoard = TaskBoard<FixedClock, ScenarioConfirmation>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub board: TestTaskBoard,
    pub confirmation: Arc<ScenarioConfirmation>,
    pub last_draft: Option<TaskDraft>,
    pub last_submit_accepted: Option<bool>,
}

impl BoardWorld {
    /// Creates a world whose clock reads 2024-01-01.
    #[must_use]
    pub fn new() -> Self {
        let confirmation = Arc::new(ScenarioConfirmation {
            answer: AtomicBool::new(true),
        });
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        Self {
            board: board_at(today, Arc::clone(&confirmation)),
            confirmation,
            last_draft: None,
            last_submit_accepted: None,
        }
    }

    /// Replaces the board with an empty one whose clock reads `today`.
    pub fn reset_clock(&mut self, today: NaiveDate) {
        self.board = board_at(today, Arc::clone(&self.confirmation));
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn board_at(today: NaiveDate, confirmation: Arc<ScenarioConfirmation>) -> TestTaskBoard {
    let clock = FixedClock::new(today.and_time(NaiveTime::default()).and_utc());
    TaskBoard::new(BoardConfig::default(), Arc::new(clock), confirmation)
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses an ISO `YYYY-MM-DD` date captured from a step.
pub fn parse_date(raw: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid date '{raw}': {err}"))
}
