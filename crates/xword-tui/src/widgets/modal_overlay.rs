//! Dimmed backdrop, drop shadow and centering shared by the popups

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// `width` x `height` centered in `area`, shrunk to fit.
///
/// ```
/// use ratatui::layout::Rect;
/// use xword_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Dim `area`, draw the popup's shadow and clear the popup itself.
/// Returns the rect the popup should render into.
pub fn prepare_modal(buf: &mut Buffer, area: Rect, width: u16, height: u16) -> Rect {
    buf.set_style(
        area,
        Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::DEEPEST_BG),
    );

    let modal = centered_rect(width, height, area);
    for strip in shadow_strips(modal) {
        let strip = strip.intersection(buf.area);
        if strip.is_empty() {
            continue;
        }
        Clear.render(strip, buf);
        buf.set_style(strip, Style::default().bg(palette::SHADOW));
    }

    Clear.render(modal, buf);
    modal
}

/// One-cell strips along the right and bottom edges, offset by one
fn shadow_strips(modal: Rect) -> [Rect; 2] {
    let right = Rect::new(modal.right(), modal.y.saturating_add(1), 1, modal.height);
    let bottom = Rect::new(modal.x.saturating_add(1), modal.bottom(), modal.width, 1);
    [right, bottom]
}
