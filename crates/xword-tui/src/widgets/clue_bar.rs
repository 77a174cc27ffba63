//! Bar showing the text of the selected clue

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct ClueBar<'a> {
    clue: &'a str,
}

impl<'a> ClueBar<'a> {
    pub fn new(clue: &'a str) -> Self {
        Self { clue }
    }
}

impl Widget for ClueBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(!self.clue.is_empty())
            .title(" Clue ")
            .style(Style::default().bg(palette::CARD_BG));

        let line = if self.clue.is_empty() {
            Line::from(Span::styled(
                " Start typing or use the arrow keys to pick a clue",
                styles::text_muted(),
            ))
        } else {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(self.clue, styles::text_primary()),
            ])
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
