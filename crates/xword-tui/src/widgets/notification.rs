//! Completion notification modal

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::{palette, styles};

pub struct Notification<'a> {
    text: &'a str,
}

impl<'a> Notification<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for Notification<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.text.chars().count() as u16 + 6).max(30);
        let modal = modal_overlay::prepare_modal(buf, area, width, 6);

        let block = styles::modal_block("").border_style(styles::text_primary().fg(palette::STATUS_GREEN));
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, text_area, hint_area, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(Line::from(Span::styled(self.text, styles::accent_bold())))
            .alignment(Alignment::Center)
            .render(text_area, buf);

        let hint = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] Continue", styles::text_muted()),
        ]);
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .render(hint_area, buf);
    }
}
