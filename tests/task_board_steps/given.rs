//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, parse_date};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklist::task::domain::{Task, TaskData, TaskId, TaskPriority, TaskStatus, TaskTitle};

#[given("today is {date}")]
fn today_is(world: &mut BoardWorld, date: String) -> Result<(), eyre::Report> {
    world.reset_clock(parse_date(&date)?);
    Ok(())
}

#[given(r#"a task "{id}" titled "{title}" due {deadline} with {priority} priority"#)]
fn existing_task(
    world: &mut BoardWorld,
    id: String,
    title: String,
    deadline: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let task = Task::from_data(TaskData {
        id: TaskId::from_raw(id).wrap_err("construct task id")?,
        title: TaskTitle::new(title).wrap_err("construct task title")?,
        deadline: parse_date(&deadline)?,
        priority: TaskPriority::try_from(priority.as_str()).wrap_err("parse priority")?,
        status: TaskStatus::Todo,
    });
    world.board.update_task(task);
    Ok(())
}

#[given("the user declines deletions")]
fn user_declines_deletions(world: &mut BoardWorld) {
    world.confirmation.answer_with(false);
}
