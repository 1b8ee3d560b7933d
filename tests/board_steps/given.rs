//! Given steps for board BDD scenarios.

use super::world::{BoardWorld, parse_lane};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::storage::{ports::KeyValueStore, services::DEFAULT_TASKS_KEY};

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.board.tasks().is_empty() {
        return Err(eyre::eyre!("expected the scenario to start without tasks"));
    }
    Ok(())
}

#[given(r#"a task "{title}" in lane "{lane}""#)]
fn task_in_lane(world: &mut BoardWorld, title: String, lane: String) -> Result<(), eyre::Report> {
    let target_lane = parse_lane(&lane)?;
    world
        .board
        .add_task(&title, None, target_lane)
        .wrap_err("add task in scenario setup")?;
    Ok(())
}

#[given("stored tasks that are not valid JSON")]
fn corrupted_tasks(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .store
        .set(DEFAULT_TASKS_KEY, "[{\"id\": \"broken\"")
        .wrap_err("seed corrupted task data")?;
    Ok(())
}
