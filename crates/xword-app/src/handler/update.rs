//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use xword_core::prelude::*;

use super::{grid, keys::handle_key, session, timer, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::TimerTick { generation } => timer::handle_tick(state, generation),

        // ─────────────────────────────────────────────────────────
        // Session Controller Actions
        // ─────────────────────────────────────────────────────────
        Message::SelectPuzzle { id } => report(session::handle_select_puzzle(state, &id)),
        Message::ClueSelected { direction, number } => {
            report(session::handle_clue_selected(state, direction, number))
        }
        Message::PuzzleCompleted { is_correct } => {
            report(session::handle_puzzle_completed(state, is_correct))
        }
        Message::RequestReset => report(session::handle_request_reset(state)),
        Message::ConfirmReset => report(session::handle_confirm_reset(state)),
        Message::CancelReset => session::handle_cancel_reset(state),
        Message::Check => report(session::handle_check(state)),
        Message::Solve => report(session::handle_solve(state)),
        Message::ToggleMenu => report(session::handle_toggle_menu(state)),
        Message::CloseMenu => report(session::handle_close_menu(state)),

        // ─────────────────────────────────────────────────────────
        // Grid Messages
        // ─────────────────────────────────────────────────────────
        Message::GridInput(input) => report(grid::handle_grid_input(state, input)),
        Message::GridEvents(events) => report(grid::handle_grid_events(state, events)),

        // ─────────────────────────────────────────────────────────
        // Menu Navigation
        // ─────────────────────────────────────────────────────────
        Message::MenuUp => session::handle_menu_move(state, false),
        Message::MenuDown => session::handle_menu_move(state, true),
        Message::MenuSelect => report(session::handle_menu_select(state)),

        Message::DismissNotification => session::handle_dismiss_notification(state),
    }
}

/// Log a failed controller action. State is left as the handler found it.
fn report(result: Result<UpdateResult>) -> UpdateResult {
    result.unwrap_or_else(|e| {
        error!("{}", e);
        UpdateResult::none()
    })
}
