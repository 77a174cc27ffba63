//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use xword_app::state::{AppState, UiMode};
use xword_core::format_elapsed;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let Some(session) = state.session.as_ref() else {
        render_empty_catalog(frame, area);
        return;
    };

    let ui = &state.settings.ui;
    let areas = layout::create(area, ui.show_clue_lists);

    let mut toolbar = widgets::Toolbar::new(state.active_puzzle_label());
    if ui.show_timer {
        toolbar = toolbar.with_timer(format_elapsed(session.elapsed_seconds), session.run_status);
    }
    frame.render_widget(toolbar, areas.header);

    frame.render_widget(widgets::ClueBar::new(&session.current_clue), areas.clue_bar);

    let grid_view = state.grid_view();
    if let Some(view) = &grid_view {
        let block = styles::glass_block(true)
            .title(format!(" {} ", view.direction.label()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(areas.grid);
        frame.render_widget(block, areas.grid);
        frame.render_widget(widgets::CrosswordGridView::new(view), inner);
    }

    if let Some(clues_area) = areas.clues {
        let active = grid_view.as_ref().and_then(|v| v.active_clue);
        frame.render_widget(
            widgets::ClueLists::new(&session.active_puzzle_data).active(active),
            clues_area,
        );
    }

    // Overlays
    if session.menu_open {
        let menu = widgets::PuzzleMenu::new(&state.catalog, state.menu_index)
            .active(Some(&session.active_puzzle_id));
        frame.render_widget(menu, area);
    }

    match state.ui_mode {
        UiMode::ConfirmDialog => {
            if let Some(dialog_state) = &state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
            }
        }
        UiMode::Notification => {
            if let Some(text) = &state.notification {
                frame.render_widget(widgets::Notification::new(text), area);
            }
        }
        UiMode::Normal => {}
    }
}

/// Shown when no puzzle could be loaded
fn render_empty_catalog(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("No puzzles found", styles::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Point --puzzles or [catalog] puzzle_dir at a directory of .json puzzles.",
            styles::text_secondary(),
        )),
        Line::from(vec![
            Span::styled("Press ", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled(" to quit.", styles::text_muted()),
        ]),
    ];

    let block = styles::glass_block(false).title(" xword ");
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}
