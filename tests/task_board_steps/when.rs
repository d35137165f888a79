//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, parse_date};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasklist::task::domain::{SortConfig, TaskDraft, TaskId, TaskPriority, TaskTitle};

fn submit(world: &mut BoardWorld, draft: TaskDraft) {
    world.last_submit_accepted = Some(world.board.submit_task(&draft));
    world.last_draft = Some(draft);
}

#[when("the board is sorted by deadline then title")]
fn sort_by_deadline_then_title(world: &mut BoardWorld) {
    world.board.set_sort_config(SortConfig::deadline_then_title());
}

#[when(r#"the title filter is set to "{text}""#)]
fn set_title_filter(world: &mut BoardWorld, text: String) {
    let _ = world.board.filter_by_title(text);
}

#[when(r#"a task titled "{title}" due {deadline} with {priority} priority is submitted"#)]
fn submit_task(
    world: &mut BoardWorld,
    title: String,
    deadline: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let parsed_priority = TaskPriority::try_from(priority.as_str()).wrap_err("parse priority")?;
    let draft = world
        .board
        .create_task(title, parse_date(&deadline)?, parsed_priority);
    submit(world, draft);
    Ok(())
}

#[when("the same draft is submitted again")]
fn resubmit_draft(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let draft = world
        .last_draft
        .clone()
        .ok_or_else(|| eyre::eyre!("missing draft in scenario world"))?;
    submit(world, draft);
    Ok(())
}

#[when("a task with a {length:usize} character title is submitted")]
fn submit_title_of_length(world: &mut BoardWorld, length: usize) {
    let today = world.board.today();
    let draft = world
        .board
        .create_task("x".repeat(length), today, TaskPriority::Medium);
    submit(world, draft);
}

#[when("a task due {deadline} is submitted")]
fn submit_task_due(world: &mut BoardWorld, deadline: String) -> Result<(), eyre::Report> {
    let draft = world
        .board
        .create_task("Deadline check", parse_date(&deadline)?, TaskPriority::Medium);
    submit(world, draft);
    Ok(())
}

#[when(r#"task "{id}" is renamed to "{title}""#)]
fn rename_task(world: &mut BoardWorld, id: String, title: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::from_raw(id).wrap_err("construct task id")?;
    let existing = world
        .board
        .collection()
        .find(&task_id)
        .cloned()
        .ok_or_else(|| eyre::eyre!("no task with id {task_id}"))?;
    let renamed = existing.with_title(TaskTitle::new(title).wrap_err("construct title")?);
    eyre::ensure!(
        world.board.update_task(renamed),
        "task {task_id} was inserted instead of renamed"
    );
    Ok(())
}

#[when(r#"task "{id}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, id: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::from_raw(id).wrap_err("construct task id")?;
    let _ = world.board.delete_task(&task_id);
    Ok(())
}
