//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use tasklist::task::domain::TaskId;

#[then(r#"the visible tasks are "{ids}""#)]
fn visible_tasks_are(world: &BoardWorld, ids: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = ids.split(',').map(str::trim).collect();
    let visible = world.board.visible();
    let actual: Vec<&str> = visible.iter().map(|task| task.id().as_str()).collect();
    if actual != expected {
        return Err(eyre::eyre!("expected tasks {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the submission is {outcome}")]
fn submission_outcome(world: &BoardWorld, outcome: String) -> Result<(), eyre::Report> {
    let expected = match outcome.as_str() {
        "accepted" => true,
        "rejected" => false,
        other => return Err(eyre::eyre!("unknown submission outcome '{other}'")),
    };
    let accepted = world
        .last_submit_accepted
        .ok_or_else(|| eyre::eyre!("missing submission result in scenario world"))?;
    if accepted != expected {
        return Err(eyre::eyre!("expected submission to be {outcome}"));
    }
    Ok(())
}

#[then("the board holds {count:usize} tasks")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.board.tasks().len();
    if held != count {
        return Err(eyre::eyre!("expected {count} tasks, found {held}"));
    }
    Ok(())
}

#[then(r#"task "{id}" is titled "{title}""#)]
fn task_is_titled(world: &BoardWorld, id: String, title: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::from_raw(id).map_err(|err| eyre::eyre!("invalid id: {err}"))?;
    let task = world
        .board
        .collection()
        .find(&task_id)
        .ok_or_else(|| eyre::eyre!("no task with id {task_id}"))?;
    if task.title().as_str() != title {
        return Err(eyre::eyre!(
            "expected title '{title}', found '{}'",
            task.title()
        ));
    }
    Ok(())
}
