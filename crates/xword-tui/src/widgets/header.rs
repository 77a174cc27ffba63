//! Toolbar: app title, active puzzle, solve timer and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use xword_app::session::RunStatus;

use crate::theme::{palette, styles};

/// Key hints shown in the toolbar: `(key, action)`
const SHORTCUTS: &[(&str, &str)] = &[
    ("^R", "Reset"),
    ("^K", "Check"),
    ("^S", "Solve"),
    ("^P", "Puzzles"),
    ("^Q", "Quit"),
];

pub struct Toolbar<'a> {
    puzzle_label: Option<&'a str>,
    elapsed: Option<String>,
    run_status: RunStatus,
}

impl<'a> Toolbar<'a> {
    pub fn new(puzzle_label: Option<&'a str>) -> Self {
        Self {
            puzzle_label,
            elapsed: None,
            run_status: RunStatus::Running,
        }
    }

    /// Show the formatted solve time next to the label
    pub fn with_timer(mut self, elapsed: String, run_status: RunStatus) -> Self {
        self.elapsed = Some(elapsed);
        self.run_status = run_status;
        self
    }

    fn left_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled("xword", styles::accent_bold()),
        ];
        if let Some(label) = self.puzzle_label {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("/", styles::text_muted()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, styles::text_secondary()));
        }
        if let Some(elapsed) = &self.elapsed {
            let (icon, icon_style) = styles::run_indicator(self.run_status);
            spans.push(Span::raw("   "));
            spans.push(Span::styled(icon, icon_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(elapsed.clone(), styles::text_primary()));
        }
        Line::from(spans)
    }

    fn shortcuts_line() -> Line<'static> {
        let mut spans = Vec::with_capacity(SHORTCUTS.len() * 3);
        for (i, (key, action)) in SHORTCUTS.iter().enumerate() {
            let sep = if i + 1 < SHORTCUTS.len() { "  " } else { " " };
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {action}{sep}"), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = self.left_line();
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Right-align the hints when they fit beside the title
        let shortcuts = Self::shortcuts_line();
        let shortcuts_width = shortcuts.width() as u16;
        if left_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_toolbar_renders_label_and_timer() {
        let mut term = TestTerminal::new();
        let toolbar = Toolbar::new(Some("CS")).with_timer("01:05".into(), RunStatus::Running);

        term.render_widget(toolbar, Rect::new(0, 0, 100, 3));

        assert!(term.buffer_contains("xword"));
        assert!(term.buffer_contains("CS"));
        assert!(term.buffer_contains("01:05"));
    }

    #[test]
    fn test_toolbar_shows_shortcuts_when_wide() {
        let mut term = TestTerminal::new();
        term.render_widget(Toolbar::new(Some("CS")), Rect::new(0, 0, 100, 3));

        assert!(term.buffer_contains("Reset"));
        assert!(term.buffer_contains("Solve"));
        assert!(term.buffer_contains("Puzzles"));
    }

    #[test]
    fn test_toolbar_drops_shortcuts_when_narrow() {
        let mut term = TestTerminal::with_size(30, 3);
        term.render_widget(Toolbar::new(Some("CS")), Rect::new(0, 0, 30, 3));

        assert!(term.buffer_contains("CS"));
        assert!(!term.buffer_contains("Solve"));
    }

    #[test]
    fn test_toolbar_without_timer() {
        let mut term = TestTerminal::new();
        term.render_widget(Toolbar::new(Some("Easy")), Rect::new(0, 0, 100, 3));

        assert!(!term.buffer_contains("●"));
    }
}
