//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Toolbar: title, puzzle label, timer and key hints
    pub header: Rect,

    /// Text of the selected clue
    pub clue_bar: Rect,

    pub grid: Rect,

    /// Across/Down lists; `None` when hidden or the screen is too narrow
    pub clues: Option<Rect>,
}

/// Below this width the clue lists are dropped in favour of the grid
const MIN_WIDTH_FOR_CLUES: u16 = 60;

/// Create the main screen layout
pub fn create(area: Rect, show_clue_lists: bool) -> ScreenAreas {
    let [header, clue_bar, body] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
    ])
    .areas(area);

    if !show_clue_lists || area.width < MIN_WIDTH_FOR_CLUES {
        return ScreenAreas {
            header,
            clue_bar,
            grid: body,
            clues: None,
        };
    }

    let [grid, clues] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);

    ScreenAreas {
        header,
        clue_bar,
        grid,
        clues: Some(clues),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_clue_lists() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create(area, true);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.clue_bar.y, 3);
        assert_eq!(layout.grid.y, 6);
        assert_eq!(layout.grid.height, 24);

        let clues = layout.clues.unwrap();
        assert_eq!(layout.grid.width + clues.width, area.width);
    }

    #[test]
    fn test_layout_without_clue_lists() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create(area, false);

        assert!(layout.clues.is_none());
        assert_eq!(layout.grid.width, 100);
    }

    #[test]
    fn test_narrow_screen_drops_clue_lists() {
        let layout = create(Rect::new(0, 0, 40, 20), true);
        assert!(layout.clues.is_none());
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);
        assert_eq!(
            layout.header.height + layout.clue_bar.height + layout.grid.height,
            area.height
        );
    }
}
