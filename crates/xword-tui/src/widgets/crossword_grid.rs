//! Crossword grid rendering
//!
//! Draws a [`GridView`] projection. Each puzzle cell takes `CELL_WIDTH` x
//! `CELL_HEIGHT` terminal cells: the clue number (and circle marker) on the
//! top line, the entry on the bottom line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use xword_app::grid::{CellView, GridView};

use crate::theme::{palette, styles};

pub const CELL_WIDTH: u16 = 4;
pub const CELL_HEIGHT: u16 = 2;

const CIRCLE_MARK: char = '◯';
const BLOCK_FILL: &str = "████";

pub struct CrosswordGridView<'a> {
    view: &'a GridView,
}

impl<'a> CrosswordGridView<'a> {
    pub fn new(view: &'a GridView) -> Self {
        Self { view }
    }

    /// Terminal size needed to draw the whole grid
    pub fn required_size(&self) -> (u16, u16) {
        (
            cells_to_terminal(self.view.cols, CELL_WIDTH),
            cells_to_terminal(self.view.rows, CELL_HEIGHT),
        )
    }
}

impl Widget for CrosswordGridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.required_size();

        // Center when there is room; otherwise anchor top-left and clip
        let origin_x = area.x + area.width.saturating_sub(width) / 2;
        let origin_y = area.y + area.height.saturating_sub(height) / 2;
        let right = area.x + area.width;
        let bottom = area.y + area.height;

        for (row, cells) in self.view.cells.iter().enumerate() {
            let y = origin_y.saturating_add(cells_to_terminal(row, CELL_HEIGHT));
            if y.saturating_add(CELL_HEIGHT) > bottom {
                break;
            }
            for (col, cell) in cells.iter().enumerate() {
                let x = origin_x.saturating_add(cells_to_terminal(col, CELL_WIDTH));
                if x.saturating_add(CELL_WIDTH) > right {
                    break;
                }
                render_cell(cell, x, y, buf);
            }
        }
    }
}

/// Terminal extent of `count` grid cells, saturating at `u16::MAX`
fn cells_to_terminal(count: usize, cell_size: u16) -> u16 {
    u16::try_from(count)
        .unwrap_or(u16::MAX)
        .saturating_mul(cell_size)
}

fn render_cell(cell: &CellView, x: u16, y: u16, buf: &mut Buffer) {
    match cell {
        CellView::Block => {
            let style = Style::default().fg(palette::BLOCK_FG);
            for dy in 0..CELL_HEIGHT {
                buf.set_string(x, y + dy, BLOCK_FILL, style);
            }
        }
        CellView::Letter {
            guess,
            number,
            circled,
            status,
            focus,
        } => {
            let style = styles::cell(*focus, *status);

            let number = number.map(|n| n.to_string()).unwrap_or_default();
            let marker = if *circled { CIRCLE_MARK } else { ' ' };
            let top = format!("{number:<3}{marker}");
            buf.set_string(x, y, &top, style.fg(palette::CELL_NUMBER));

            let entry = guess.unwrap_or(' ');
            buf.set_string(x, y + 1, format!(" {entry}  "), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use xword_app::grid::{CrosswordGrid, GridInput, GridWidget};
    use xword_app::Catalog;

    fn cpu_view(inputs: &[GridInput]) -> GridView {
        let catalog = Catalog::bundled();
        let mut grid = CrosswordGrid::new(&catalog.get("cpu").unwrap().data);
        for input in inputs {
            grid.handle_input(*input);
        }
        grid.view()
    }

    #[test]
    fn test_required_size() {
        let view = cpu_view(&[]);
        let widget = CrosswordGridView::new(&view);
        assert_eq!(
            widget.required_size(),
            (view.cols as u16 * CELL_WIDTH, view.rows as u16 * CELL_HEIGHT)
        );
    }

    #[test]
    fn test_grid_shows_entries_and_numbers() {
        let view = cpu_view(&[GridInput::Letter('b'), GridInput::Letter('i')]);
        let (width, height) = CrosswordGridView::new(&view).required_size();
        let mut term = TestTerminal::with_size(width, height);

        term.render_widget(CrosswordGridView::new(&view), term.area());

        // Top-left cell: number 1 above entry B
        assert_eq!(term.buffer()[(0, 0)].symbol(), "1");
        assert_eq!(term.buffer()[(1, 1)].symbol(), "B");
        assert_eq!(term.buffer()[(CELL_WIDTH + 1, 1)].symbol(), "I");
    }

    #[test]
    fn test_grid_marks_circles_and_blocks() {
        let view = cpu_view(&[]);
        let (width, height) = CrosswordGridView::new(&view).required_size();
        let mut term = TestTerminal::with_size(width, height);

        term.render_widget(CrosswordGridView::new(&view), term.area());

        assert!(term.buffer_contains("◯"));
        assert!(term.buffer_contains("█"));
    }

    #[test]
    fn test_required_size_saturates() {
        let view = GridView {
            rows: 70_000,
            cols: usize::MAX,
            cells: Vec::new(),
            ..cpu_view(&[])
        };
        assert_eq!(
            CrosswordGridView::new(&view).required_size(),
            (u16::MAX, u16::MAX)
        );
    }

    #[test]
    fn test_grid_clips_in_small_area() {
        let view = cpu_view(&[]);
        let mut term = TestTerminal::with_size(6, 3);

        // Must not write outside the buffer
        term.render_widget(CrosswordGridView::new(&view), term.area());
        assert_eq!(term.buffer()[(0, 0)].symbol(), "1");
    }
}
