//! When steps for board BDD scenarios.

use super::world::{BoardWorld, parse_lane};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::DropTarget;
use taskboard::task::domain::{TaskPatch, TaskTitle};

#[when(r#"a task titled "{title}" is added to lane "{lane}""#)]
fn add_task(world: &mut BoardWorld, title: String, lane: String) -> Result<(), eyre::Report> {
    let target_lane = parse_lane(&lane)?;
    world.last_error = world.board.add_task(&title, None, target_lane).err();
    Ok(())
}

#[when(r#"{count:usize} tasks are added to lane "{lane}""#)]
fn add_many_tasks(world: &mut BoardWorld, count: usize, lane: String) -> Result<(), eyre::Report> {
    let target_lane = parse_lane(&lane)?;
    for n in 1..=count {
        world
            .board
            .add_task(&format!("Task {n}"), None, target_lane)
            .wrap_err("add numbered task")?;
    }
    Ok(())
}

#[when(r#"task "{title}" is renamed to "{new_title}""#)]
fn rename_task(
    world: &mut BoardWorld,
    title: String,
    new_title: String,
) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let replacement = TaskTitle::new(new_title).wrap_err("valid replacement title")?;
    world
        .board
        .update_task(id, TaskPatch::new().with_title(replacement))
        .ok_or_else(|| eyre::eyre!("rename of {title:?} changed nothing"))?;
    Ok(())
}

#[when(r#"task "{title}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    world
        .board
        .delete_task(id)
        .ok_or_else(|| eyre::eyre!("task {title:?} was not deleted"))?;
    Ok(())
}

#[when(r#"task "{title}" is repositioned to index {index:usize}"#)]
fn reposition_task(
    world: &mut BoardWorld,
    title: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    if !world.board.reposition_task(id, index) {
        return Err(eyre::eyre!("task {title:?} did not change position"));
    }
    Ok(())
}

#[when("the board is reopened")]
fn reopen_board(world: &mut BoardWorld) {
    world.reopen();
}

#[when(r#"task "{title}" is picked up"#)]
fn pick_up(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    if !world.controller.drag_start(&mut world.board, id) {
        return Err(eyre::eyre!("drag of {title:?} did not start"));
    }
    world.dragging = Some(id);
    Ok(())
}

#[when(r#"it is dragged over lane "{lane}""#)]
fn drag_over_lane(world: &mut BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let id = world.dragged()?;
    let target_lane = parse_lane(&lane)?;
    world
        .controller
        .drag_over(&mut world.board, id, Some(DropTarget::Lane(target_lane)));
    Ok(())
}

#[when(r#"it is dragged over task "{title}""#)]
fn drag_over_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.dragged()?;
    let target = world.task_id(&title)?;
    world
        .controller
        .drag_over(&mut world.board, id, Some(DropTarget::Task(target)));
    Ok(())
}

#[when(r#"it is dropped on lane "{lane}""#)]
fn drop_on_lane(world: &mut BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let id = world.dragged()?;
    let target_lane = parse_lane(&lane)?;
    world
        .controller
        .drag_end(&mut world.board, id, Some(DropTarget::Lane(target_lane)));
    Ok(())
}

#[when(r#"it is dropped on task "{title}""#)]
fn drop_on_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.dragged()?;
    let target = world.task_id(&title)?;
    world
        .controller
        .drag_end(&mut world.board, id, Some(DropTarget::Task(target)));
    Ok(())
}

#[when("it is dropped on itself")]
fn drop_on_itself(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let id = world.dragged()?;
    world
        .controller
        .drag_end(&mut world.board, id, Some(DropTarget::Task(id)));
    Ok(())
}

#[when("it is dropped outside the board")]
fn drop_outside(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let id = world.dragged()?;
    world.controller.drag_end(&mut world.board, id, None);
    Ok(())
}
