//! Confirmation dialog widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use xword_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::{palette, styles};

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// `[y] Reset  [n] Cancel`, taking labels from the dialog options
    fn buttons(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for ((label, _), key) in self.state.options.iter().zip(["y", "n"]) {
            let key_style = if key == "y" {
                styles::text_primary().fg(palette::STATUS_GREEN)
            } else {
                styles::text_primary().fg(palette::STATUS_RED)
            };
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, key_style.add_modifier(Modifier::BOLD)));
            spans.push(Span::styled("] ", styles::text_muted()));
            spans.push(Span::styled(label.as_str(), styles::text_secondary()));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, 50, 9);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, message_area, _, buttons_area, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::text_primary().fg(palette::STATUS_YELLOW))
            .render(message_area, buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(buttons_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_reset_dialog_renders_title_message_and_options() {
        let state = ConfirmDialogState::reset_confirmation("CS");
        let mut term = TestTerminal::new();

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Reset CS?"));
        assert!(term.buffer_contains("Are you sure"));
        assert!(term.buffer_contains("progress on this puzzle?"));
        assert!(term.buffer_contains("[y] Reset"));
        assert!(term.buffer_contains("[n] Cancel"));
    }
}
