//! Then steps for board BDD scenarios.

use super::world::{BoardWorld, parse_lane};
use rstest_bdd_macros::then;
use taskboard::board::BoardError;
use taskboard::task::domain::TaskDomainError;

#[then(r#"lane "{lane}" lists "{titles}""#)]
fn lane_lists(world: &BoardWorld, lane: String, titles: String) -> Result<(), eyre::Report> {
    let target_lane = parse_lane(&lane)?;
    let expected: Vec<&str> = titles
        .split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .collect();
    let actual: Vec<&str> = world
        .board
        .task_store()
        .tasks_in(target_lane)
        .map(|task| task.title().as_str())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!(
            "expected lane {target_lane} to list {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"task "{title}" is in lane "{lane}""#)]
fn task_is_in_lane(world: &BoardWorld, title: String, lane: String) -> Result<(), eyre::Report> {
    let expected = parse_lane(&lane)?;
    let id = world.task_id(&title)?;
    let actual = world
        .board
        .task(id)
        .map(|task| task.status())
        .ok_or_else(|| eyre::eyre!("task {title:?} disappeared"))?;
    if actual != expected {
        return Err(eyre::eyre!(
            "expected {title:?} in lane {expected}, found {actual}"
        ));
    }
    Ok(())
}

#[then("the board has no tasks")]
fn board_has_no_tasks(world: &BoardWorld) -> Result<(), eyre::Report> {
    let count = world.board.tasks().len();
    if count != 0 {
        return Err(eyre::eyre!("expected no tasks, found {count}"));
    }
    Ok(())
}

#[then("the board rejects the title")]
fn board_rejects_title(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(BoardError::Domain(TaskDomainError::EmptyTitle)) => Ok(()),
        other => Err(eyre::eyre!("expected an empty title error, got {other:?}")),
    }
}

#[then("the activity log is empty")]
fn activity_log_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let count = world.board.history().len();
    if count != 0 {
        return Err(eyre::eyre!("expected no activity, found {count} entries"));
    }
    Ok(())
}

#[then("the activity log holds {count:usize} entries")]
fn activity_log_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board.history().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} entries, found {actual}"));
    }
    Ok(())
}

#[then(r#"the latest activity is "{action}" for "{title}""#)]
fn latest_activity_is(
    world: &BoardWorld,
    action: String,
    title: String,
) -> Result<(), eyre::Report> {
    let entry = world.latest_entry()?;
    if entry.action().as_str() != action || entry.task_title() != title {
        return Err(eyre::eyre!(
            "expected {action} for {title:?}, found {} for {:?}",
            entry.action(),
            entry.task_title()
        ));
    }
    Ok(())
}

#[then(r#"the latest activity mentions "{text}""#)]
fn latest_activity_mentions(world: &BoardWorld, text: String) -> Result<(), eyre::Report> {
    let summary = world.latest_entry()?.summary();
    if !summary.contains(&text) {
        return Err(eyre::eyre!("expected {summary:?} to mention {text:?}"));
    }
    Ok(())
}

#[then(r#"the oldest activity is for "{title}""#)]
fn oldest_activity_is_for(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let oldest = world
        .board
        .history()
        .list()
        .first()
        .ok_or_else(|| eyre::eyre!("activity log is empty"))?;
    if oldest.task_title() != title {
        return Err(eyre::eyre!(
            "expected oldest entry for {title:?}, found {:?}",
            oldest.task_title()
        ));
    }
    Ok(())
}

#[then("no card is being dragged")]
fn no_card_dragged(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.controller.is_dragging() || world.board.gesture_start_lane().is_some() {
        return Err(eyre::eyre!("expected the drag to have ended"));
    }
    Ok(())
}
