//! Grid input forwarding and grid event handling

use xword_core::prelude::*;

use crate::grid::{GridEvent, GridInput};
use crate::message::Message;
use crate::state::AppState;

use super::{session, UpdateResult};

/// Forward editing/navigation input to the mounted grid
pub(crate) fn handle_grid_input(state: &mut AppState, input: GridInput) -> Result<UpdateResult> {
    state.session()?;
    let Some(grid) = state.grid.as_mut() else {
        debug!("Grid input before grid mounted: {:?}", input);
        return Ok(UpdateResult::none());
    };

    let events = grid.handle_input(input);
    if events.is_empty() {
        Ok(UpdateResult::none())
    } else {
        Ok(UpdateResult::message(Message::GridEvents(events)))
    }
}

/// Apply grid events in order. Completion is handed on as a follow-up
/// [`Message::PuzzleCompleted`].
pub(crate) fn handle_grid_events(
    state: &mut AppState,
    events: Vec<GridEvent>,
) -> Result<UpdateResult> {
    let mut cells_changed = false;
    let mut completion = None;

    for event in events {
        match event {
            GridEvent::ClueSelected { direction, number } => {
                session::handle_clue_selected(state, direction, number)?;
            }
            GridEvent::CellChanged { row, col, guess } => {
                trace!("Cell R{}C{} -> {:?}", row, col, guess);
                cells_changed = true;
            }
            GridEvent::CrosswordComplete { is_correct } => completion = Some(is_correct),
        }
    }

    if cells_changed {
        save_grid_progress(state);
    }

    Ok(match completion {
        Some(is_correct) => UpdateResult::message(Message::PuzzleCompleted { is_correct }),
        None => UpdateResult::none(),
    })
}

/// Persist the grid's entries for the active puzzle
pub(crate) fn save_grid_progress(state: &mut AppState) {
    if let (Some(session), Some(grid)) = (&state.session, &state.grid) {
        let json = grid.snapshot().to_json();
        state
            .timer
            .persist_guesses(&session.active_puzzle_id, &json);
    }
}
