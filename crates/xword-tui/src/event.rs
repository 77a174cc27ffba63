//! Crossterm input, translated at the crate boundary

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use xword_app::input_key::InputKey;
use xword_app::message::Message;
use xword_core::prelude::*;

/// Short enough that the clock redraws on time
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Map a key press; Alt chords and keys the app has no use for map to `None`
pub fn to_input_key(key: KeyEvent) -> Option<InputKey> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    let input = match key.code {
        // Ctrl+Shift+S still means Ctrl+S
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputKey::CharCtrl(c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Delete => InputKey::Delete,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::F(n) => InputKey::F(n),
        _ => return None,
    };
    Some(input)
}

/// Wait up to [`POLL_TIMEOUT`] for a key press.
///
/// `None` on timeout, resize or release events; the caller redraws either way.
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_TIMEOUT)? {
        return Ok(None);
    }

    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => to_input_key(key).map(Message::Key),
        Event::Resize(width, height) => {
            trace!("Resized to {}x{}", width, height);
            None
        }
        _ => None,
    })
}
