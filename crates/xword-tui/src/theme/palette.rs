//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
/// Foreground on accent backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Grid ---
pub const CELL_BG: Color = Color::Rgb(40, 44, 52);
pub const WORD_BG: Color = Color::Rgb(56, 107, 163);
pub const CURSOR_BG: Color = Color::Yellow;
pub const BLOCK_FG: Color = Color::Rgb(10, 12, 16);
pub const CELL_NUMBER: Color = Color::Gray;

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);
