//! Puzzle selector modal

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use xword_app::Catalog;

use super::modal_overlay;
use crate::theme::styles;

/// Borders plus the 31-column hint line
const MIN_WIDTH: u16 = 33;

pub struct PuzzleMenu<'a> {
    catalog: &'a Catalog,
    highlighted: usize,
    active_id: Option<&'a str>,
}

impl<'a> PuzzleMenu<'a> {
    pub fn new(catalog: &'a Catalog, highlighted: usize) -> Self {
        Self {
            catalog,
            highlighted,
            active_id: None,
        }
    }

    /// Mark the puzzle currently being solved
    pub fn active(mut self, id: Option<&'a str>) -> Self {
        self.active_id = id;
        self
    }
}

impl Widget for PuzzleMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let entries = self.catalog.list();
        let longest = entries
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0) as u16;

        // Wide enough for the key hint row; 2 borders + 4 marker/padding columns
        let width = (longest + 8).max(MIN_WIDTH);
        let height = entries.len() as u16 + 4;
        let modal = modal_overlay::prepare_modal(buf, area, width, height);

        let block = styles::modal_block(" Puzzles ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [list_area, hint_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let lines: Vec<Line> = entries
            .iter()
            .enumerate()
            .map(|(i, puzzle)| {
                let marker = if self.active_id == Some(puzzle.id.as_str()) {
                    "● "
                } else {
                    "  "
                };
                let style = if i == self.highlighted {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Line::from(Span::styled(format!(" {marker}{} ", puzzle.label), style))
            })
            .collect();
        Paragraph::new(lines).render(list_area, buf);

        let hint = Line::from(vec![
            Span::styled(" ↑↓", styles::keybinding()),
            Span::styled(" move  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" open  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]);
        Paragraph::new(hint).render(hint_area, buf);
    }
}
