//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use xword_app::grid::{CellFocus, CellStatus};
use xword_app::session::RunStatus;

use super::palette;

pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

/// Hints, empty states and inactive clues
pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Key in a `[key] Action` hint
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Highlighted row in the clue lists and the puzzle menu
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Rounded panel; the border lights up when the panel tracks the cursor
pub fn glass_block(focused: bool) -> Block<'static> {
    let border = if focused {
        palette::BORDER_ACTIVE
    } else {
        palette::BORDER_DIM
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

pub fn modal_block(title: &str) -> Block<'_> {
    glass_block(true)
        .title(title)
        .style(Style::default().bg(palette::POPUP_BG))
}

/// Style for a letter cell given its focus and check status
pub fn cell(focus: CellFocus, status: CellStatus) -> Style {
    let base = match focus {
        CellFocus::Cursor => Style::default().bg(palette::CURSOR_BG).fg(palette::CONTRAST_FG),
        CellFocus::Word => Style::default().bg(palette::WORD_BG).fg(palette::TEXT_PRIMARY),
        CellFocus::None => Style::default().bg(palette::CELL_BG).fg(palette::TEXT_PRIMARY),
    };
    match status {
        CellStatus::Neutral => base,
        CellStatus::Correct => base.fg(palette::STATUS_GREEN).add_modifier(Modifier::BOLD),
        CellStatus::Incorrect => base
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT),
    }
}

/// Timer indicator: `(icon, Style)` for the toolbar
pub fn run_indicator(status: RunStatus) -> (&'static str, Style) {
    match status {
        RunStatus::Running => (
            "●",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        RunStatus::Stopped => ("✔", Style::default().fg(palette::ACCENT)),
    }
}
