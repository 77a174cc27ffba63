//! Across and Down clue lists

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use xword_core::{Direction, PuzzleData};

use crate::theme::{palette, styles};

pub struct ClueLists<'a> {
    puzzle: &'a PuzzleData,
    active: Option<(Direction, u32)>,
}

impl<'a> ClueLists<'a> {
    pub fn new(puzzle: &'a PuzzleData) -> Self {
        Self {
            puzzle,
            active: None,
        }
    }

    /// Highlight the clue the cursor is in
    pub fn active(mut self, active: Option<(Direction, u32)>) -> Self {
        self.active = active;
        self
    }

    fn lines(&self, direction: Direction) -> Vec<Line<'a>> {
        self.puzzle
            .clues(direction)
            .iter()
            .map(|(number, entry)| {
                let style = if self.active == Some((direction, *number)) {
                    styles::focused_selected()
                } else {
                    styles::text_secondary()
                };
                Line::from(vec![
                    Span::styled(format!("{number:>3} "), style),
                    Span::styled(entry.clue.as_str(), style),
                ])
            })
            .collect()
    }

    fn render_column(&self, direction: Direction, area: Rect, buf: &mut Buffer) {
        let focused = self.active.is_some_and(|(d, _)| d == direction);
        let block = styles::glass_block(focused)
            .title(format!(" {} ", direction.label()))
            .style(Style::default().bg(palette::CARD_BG));

        Paragraph::new(self.lines(direction))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

impl Widget for ClueLists<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [across, down] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

        self.render_column(Direction::Across, across, buf);
        self.render_column(Direction::Down, down, buf);
    }
}
