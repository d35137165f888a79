//! Shared builders for task list unit tests.

use chrono::NaiveDate;

use crate::task::domain::{Task, TaskData, TaskId, TaskPriority, TaskStatus, TaskTitle};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn task(
    id: &str,
    title: &str,
    deadline: NaiveDate,
    priority: TaskPriority,
    status: TaskStatus,
) -> Task {
    Task::from_data(TaskData {
        id: TaskId::from_raw(id).expect("valid task id"),
        title: TaskTitle::new(title).expect("valid task title"),
        deadline,
        priority,
        status,
    })
}

/// "Buy milk", due 2024-01-10, low priority.
pub fn buy_milk() -> Task {
    task(
        "t1",
        "Buy milk",
        date(2024, 1, 10),
        TaskPriority::Low,
        TaskStatus::Todo,
    )
}

/// "Pay rent", due 2024-01-05, high priority.
pub fn pay_rent() -> Task {
    task(
        "t2",
        "Pay rent",
        date(2024, 1, 5),
        TaskPriority::High,
        TaskStatus::Todo,
    )
}

pub fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id().as_str()).collect()
}
