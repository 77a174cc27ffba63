//! Full-frame rendering tests
//!
//! Content checks for individual elements, plus golden snapshots of the
//! whole screen in each UI mode.

use super::view;
use crate::test_utils::{apply, create_loaded_state, create_test_state, TestTerminal};
use insta::assert_snapshot;
use xword_app::grid::GridInput;
use xword_app::{AppState, Catalog, Message, Settings, TimerService};

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn render_screen(state: &AppState) -> String {
    render(state).content()
}

fn empty_catalog_state() -> AppState {
    AppState::new(
        Catalog::default(),
        Settings::default(),
        TimerService::in_memory(),
    )
}

#[test]
fn test_loaded_puzzle_shows_toolbar_and_grid() {
    let state = create_loaded_state("cpu");
    let term = render(&state);

    assert!(term.buffer_contains("xword"));
    assert!(term.buffer_contains("CS"));
    assert!(term.buffer_contains("00:00"));
    assert!(term.buffer_contains("Across"));
    assert!(term.buffer_contains("Start typing"));
}

#[test]
fn test_typing_shows_clue_in_bar() {
    let mut state = create_loaded_state("cpu");
    apply(&mut state, Message::GridInput(GridInput::Letter('b')));

    let term = render(&state);

    assert!(term.buffer_contains("1. Base-2 number system"));
}

#[test]
fn test_resumed_time_is_displayed() {
    let mut state = create_test_state();
    state.timer.persist("easy", 125);
    apply(&mut state, Message::SelectPuzzle { id: "easy".into() });

    let term = render(&state);

    assert!(term.buffer_contains("02:05"));
}

#[test]
fn test_timer_hidden_by_setting() {
    let mut state = create_loaded_state("cpu");
    state.settings.ui.show_timer = false;

    let term = render(&state);

    assert!(!term.buffer_contains("00:00"));
}

#[test]
fn test_clue_lists_hidden_by_setting() {
    let mut state = create_loaded_state("cpu");
    let term = render(&state);
    assert!(term.buffer_contains("Eight bits"));

    state.settings.ui.show_clue_lists = false;
    let term = render(&state);
    assert!(!term.buffer_contains("Eight bits"));
}

#[test]
fn test_menu_overlay() {
    let mut state = create_loaded_state("cpu");
    apply(&mut state, Message::ToggleMenu);

    let term = render(&state);

    assert!(term.buffer_contains("Puzzles"));
    assert!(term.buffer_contains("● CS"));
    assert!(term.buffer_contains("Easy"));
}

#[test]
fn test_reset_dialog_overlay() {
    let mut state = create_loaded_state("cpu");
    apply(&mut state, Message::RequestReset);

    let term = render(&state);

    assert!(term.buffer_contains("Reset CS?"));
}

#[test]
fn test_completion_notification_overlay() {
    let mut state = create_loaded_state("easy");
    apply(&mut state, Message::Solve);

    let term = render(&state);

    assert!(term.buffer_contains("You win!"));
}

#[test]
fn test_empty_catalog_screen() {
    let state = empty_catalog_state();

    let term = render(&state);

    assert!(term.buffer_contains("No puzzles found"));
}

// ===========================================================================
// Snapshots
// ===========================================================================

#[test]
fn snapshot_loaded_puzzle() {
    let state = create_loaded_state("cpu");

    let content = render_screen(&state);
    assert_snapshot!("loaded_puzzle", content);
}

#[test]
fn snapshot_puzzle_menu() {
    let mut state = create_loaded_state("cpu");
    apply(&mut state, Message::ToggleMenu);

    let content = render_screen(&state);
    assert_snapshot!("puzzle_menu", content);
}

#[test]
fn snapshot_confirm_reset() {
    let mut state = create_loaded_state("cpu");
    apply(&mut state, Message::RequestReset);

    let content = render_screen(&state);
    assert_snapshot!("confirm_reset", content);
}

#[test]
fn snapshot_completion_notification() {
    let mut state = create_loaded_state("cpu");
    apply(&mut state, Message::Solve);

    let content = render_screen(&state);
    assert_snapshot!("completion_notification", content);
}

#[test]
fn snapshot_empty_catalog() {
    let state = empty_catalog_state();

    let content = render_screen(&state);
    assert_snapshot!("empty_catalog", content);
}
