//! Terminal-independent key events
//!
//! The TUI converts crossterm key events into [`InputKey`] so the session
//! engine never sees crossterm types.

use crate::grid::Arrow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Plain character, including letters typed into the grid
    Char(char),
    /// Character pressed with Ctrl (always lowercase)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,

    /// Function key F1-F12
    F(u8),
}

impl InputKey {
    /// Cursor direction for arrow keys
    pub fn arrow(&self) -> Option<Arrow> {
        match self {
            InputKey::Up => Some(Arrow::Up),
            InputKey::Down => Some(Arrow::Down),
            InputKey::Left => Some(Arrow::Left),
            InputKey::Right => Some(Arrow::Right),
            _ => None,
        }
    }

    /// Letter or digit that can be entered into a cell
    pub fn entry_char(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if c.is_ascii_alphanumeric() => Some(*c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_and_plain_differ() {
        assert_ne!(InputKey::CharCtrl('r'), InputKey::Char('r'));
    }

    #[test]
    fn test_arrow() {
        assert_eq!(InputKey::Left.arrow(), Some(Arrow::Left));
        assert_eq!(InputKey::Down.arrow(), Some(Arrow::Down));
        assert_eq!(InputKey::Tab.arrow(), None);
    }

    #[test]
    fn test_entry_char() {
        assert_eq!(InputKey::Char('a').entry_char(), Some('a'));
        assert_eq!(InputKey::Char('7').entry_char(), Some('7'));
        assert_eq!(InputKey::Char(' ').entry_char(), None);
        assert_eq!(InputKey::CharCtrl('a').entry_char(), None);
    }
}
