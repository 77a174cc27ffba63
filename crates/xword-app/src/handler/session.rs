//! Session controller handlers
//!
//! Each function applies one controller action to [`AppState`]. Actions that
//! need a loaded session return [`Error::SessionNotLoaded`] before touching
//! anything.

use xword_core::prelude::*;
use xword_core::{format_elapsed, Direction};

use crate::confirm_dialog::ConfirmDialogState;
use crate::grid::{CrosswordGrid, GridSnapshot};
use crate::message::Message;
use crate::session::SessionState;
use crate::state::{AppState, UiMode};

use super::grid::save_grid_progress;
use super::UpdateResult;

/// Make `id` the active puzzle, restoring its timer and saved entries
pub(crate) fn handle_select_puzzle(state: &mut AppState, id: &str) -> Result<UpdateResult> {
    let puzzle = state.catalog.get(id)?.clone();

    let elapsed = state.timer.load(&puzzle.id);
    let mut grid = CrosswordGrid::new(&puzzle.data);
    if let Some(snapshot) = state
        .timer
        .load_guesses(&puzzle.id)
        .as_deref()
        .and_then(GridSnapshot::from_json)
    {
        grid = grid.with_snapshot(&snapshot);
    }

    state.session = Some(SessionState::start(&puzzle, elapsed));
    state.grid = Some(Box::new(grid));
    state.menu_index = state.catalog.position(&puzzle.id).unwrap_or(0);
    state.ui_mode = UiMode::Normal;
    state.confirm_dialog_state = None;
    state.notification = None;

    let generation = state.next_timer_generation();
    info!(
        "Selected puzzle '{}' ({} elapsed)",
        puzzle.id,
        format_elapsed(elapsed)
    );
    Ok(UpdateResult::start_timer(generation))
}

/// Show the text of the clue the grid cursor entered
pub(crate) fn handle_clue_selected(
    state: &mut AppState,
    direction: Direction,
    number: u32,
) -> Result<UpdateResult> {
    let session = state.session_mut()?;
    session.select_clue(direction, number);
    if session.current_clue.is_empty() {
        debug!("No clue for {} {}", number, direction);
    }
    Ok(UpdateResult::none())
}

/// Stop the clock on a correct solve. Incorrect fills are ignored.
pub(crate) fn handle_puzzle_completed(
    state: &mut AppState,
    is_correct: bool,
) -> Result<UpdateResult> {
    let session = state.session_mut()?;
    if !is_correct {
        debug!("Grid filled with mistakes");
        return Ok(UpdateResult::none());
    }
    if !session.is_running() {
        return Ok(UpdateResult::none());
    }

    session.stop();
    let solved_in = format_elapsed(session.elapsed_seconds);
    info!("Puzzle '{}' solved in {}", session.active_puzzle_id, solved_in);

    state.notification = Some(format!("You win! Solved in {solved_in}."));
    state.ui_mode = UiMode::Notification;
    state.next_timer_generation();
    Ok(UpdateResult::stop_timer())
}

/// Open the reset confirmation dialog
pub(crate) fn handle_request_reset(state: &mut AppState) -> Result<UpdateResult> {
    state.session()?;
    let label = state.active_puzzle_label().unwrap_or("puzzle").to_string();

    state.confirm_dialog_state = Some(ConfirmDialogState::reset_confirmation(&label));
    state.ui_mode = UiMode::ConfirmDialog;
    Ok(UpdateResult::none())
}

/// Wipe entries and time for the active puzzle
pub(crate) fn handle_confirm_reset(state: &mut AppState) -> Result<UpdateResult> {
    let puzzle_id = state.session()?.active_puzzle_id.clone();
    close_dialog(state);

    match state.grid.as_mut() {
        Some(grid) => grid.reset(),
        None => debug!("Reset before grid mounted"),
    }
    state.timer.clear_guesses(&puzzle_id);

    state.session_mut()?.restart();
    state.timer.persist(&puzzle_id, 0);

    let generation = state.next_timer_generation();
    info!("Reset puzzle '{}'", puzzle_id);
    Ok(UpdateResult::start_timer(generation))
}

pub(crate) fn handle_cancel_reset(state: &mut AppState) -> UpdateResult {
    close_dialog(state);
    UpdateResult::none()
}

fn close_dialog(state: &mut AppState) {
    state.confirm_dialog_state = None;
    if state.ui_mode == UiMode::ConfirmDialog {
        state.ui_mode = UiMode::Normal;
    }
}

/// Ask the grid to mark correct and incorrect entries
pub(crate) fn handle_check(state: &mut AppState) -> Result<UpdateResult> {
    state.session()?;
    match state.grid.as_mut() {
        Some(grid) => grid.check(),
        None => debug!("Check before grid mounted"),
    }
    Ok(UpdateResult::none())
}

/// Fill every answer; completion flows back as a grid event
pub(crate) fn handle_solve(state: &mut AppState) -> Result<UpdateResult> {
    state.session()?;
    let Some(grid) = state.grid.as_mut() else {
        debug!("Solve before grid mounted");
        return Ok(UpdateResult::none());
    };

    let events = grid.fill_all_answers();
    save_grid_progress(state);

    if events.is_empty() {
        Ok(UpdateResult::none())
    } else {
        Ok(UpdateResult::message(Message::GridEvents(events)))
    }
}

pub(crate) fn handle_toggle_menu(state: &mut AppState) -> Result<UpdateResult> {
    let session = state.session_mut()?;
    session.toggle_menu();

    if session.menu_open {
        let active = session.active_puzzle_id.clone();
        state.menu_index = state.catalog.position(&active).unwrap_or(0);
    }
    Ok(UpdateResult::none())
}

pub(crate) fn handle_close_menu(state: &mut AppState) -> Result<UpdateResult> {
    state.session_mut()?.close_menu();
    Ok(UpdateResult::none())
}

/// Move the menu highlight, wrapping at either end
pub(crate) fn handle_menu_move(state: &mut AppState, down: bool) -> UpdateResult {
    let len = state.catalog.len();
    if len == 0 {
        return UpdateResult::none();
    }
    let current = state.menu_index.min(len - 1);
    state.menu_index = if down {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };
    UpdateResult::none()
}

/// Load the highlighted puzzle, or just close the menu if it is already active
pub(crate) fn handle_menu_select(state: &mut AppState) -> Result<UpdateResult> {
    let active = &state.session()?.active_puzzle_id;
    let Some(puzzle) = state.catalog.list().get(state.menu_index) else {
        return Ok(UpdateResult::message(Message::CloseMenu));
    };

    if &puzzle.id == active {
        Ok(UpdateResult::message(Message::CloseMenu))
    } else {
        Ok(UpdateResult::message(Message::SelectPuzzle {
            id: puzzle.id.clone(),
        }))
    }
}

pub(crate) fn handle_dismiss_notification(state: &mut AppState) -> UpdateResult {
    state.notification = None;
    if state.ui_mode == UiMode::Notification {
        state.ui_mode = UiMode::Normal;
    }
    UpdateResult::none()
}
