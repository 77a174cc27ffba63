//! Key event handlers for different UI modes

use crate::grid::GridInput;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.session.is_none() {
        return handle_key_no_session(key);
    }

    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
        UiMode::Notification => handle_key_notification(key),
        UiMode::Normal if state.is_menu_open() => handle_key_menu(key),
        UiMode::Normal => handle_key_normal(key),
    }
}

/// Nothing loaded (empty catalog); only quitting works
fn handle_key_no_session(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c' | 'q') | InputKey::Char('q') | InputKey::Esc => {
            Some(Message::Quit)
        }
        _ => None,
    }
}

/// Handle key events in the reset confirmation dialog
fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    let dialog = state.confirm_dialog_state.as_ref();
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => {
            dialog.and_then(|d| d.confirm_message()).cloned()
        }
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(
            dialog
                .and_then(|d| d.cancel_message())
                .cloned()
                .unwrap_or(Message::CancelReset),
        ),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_notification(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => {
            Some(Message::DismissNotification)
        }
        InputKey::CharCtrl('c' | 'q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while the puzzle menu is open
fn handle_key_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MenuDown),
        InputKey::Enter => Some(Message::MenuSelect),
        InputKey::Esc => Some(Message::CloseMenu),
        InputKey::CharCtrl('p') | InputKey::F(2) => Some(Message::ToggleMenu),
        InputKey::CharCtrl('c' | 'q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode (grid has focus)
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key.clone() {
        InputKey::CharCtrl('c' | 'q') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Toolbar
        // ─────────────────────────────────────────────────────────
        InputKey::CharCtrl('r') | InputKey::F(5) => Some(Message::RequestReset),
        InputKey::CharCtrl('k') | InputKey::F(6) => Some(Message::Check),
        InputKey::CharCtrl('s') | InputKey::F(7) => Some(Message::Solve),
        InputKey::CharCtrl('p') | InputKey::F(2) => Some(Message::ToggleMenu),

        // ─────────────────────────────────────────────────────────
        // Grid
        // ─────────────────────────────────────────────────────────
        InputKey::Char(' ') => Some(Message::GridInput(GridInput::ToggleDirection)),
        InputKey::Char(c) if key.entry_char().is_some() => {
            Some(Message::GridInput(GridInput::Letter(c)))
        }
        InputKey::Backspace => Some(Message::GridInput(GridInput::Backspace)),
        InputKey::Delete => Some(Message::GridInput(GridInput::Delete)),

        InputKey::Up | InputKey::Down | InputKey::Left | InputKey::Right => {
            key.arrow().map(|arrow| Message::GridInput(GridInput::Move(arrow)))
        }

        InputKey::Tab | InputKey::Enter => Some(Message::GridInput(GridInput::NextClue)),
        InputKey::BackTab => Some(Message::GridInput(GridInput::PreviousClue)),

        _ => None,
    }
}
