//! Message types for the application (TEA pattern)

use xword_core::Direction;

use crate::grid::{GridEvent, GridInput};
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    /// One second of solve time elapsed.
    ///
    /// `generation` identifies the schedule that produced the tick; ticks from
    /// a cancelled schedule are dropped.
    TimerTick { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Session Controller Actions
    // ─────────────────────────────────────────────────────────
    /// Load a puzzle from the catalog by identifier
    SelectPuzzle { id: String },
    /// The grid cursor entered a clue
    ClueSelected { direction: Direction, number: u32 },
    /// The grid was completely filled
    PuzzleCompleted { is_correct: bool },
    /// Ask for confirmation before wiping progress
    RequestReset,
    /// Reset confirmed from the dialog
    ConfirmReset,
    /// Reset declined from the dialog
    CancelReset,
    /// Show correct/incorrect entries
    Check,
    /// Fill in every answer
    Solve,
    /// Open/close the puzzle menu
    ToggleMenu,
    /// Close the puzzle menu (idempotent)
    CloseMenu,

    // ─────────────────────────────────────────────────────────
    // Grid Messages
    // ─────────────────────────────────────────────────────────
    /// Editing or navigation input for the mounted grid
    GridInput(GridInput),
    /// Events raised by the grid, applied in order
    GridEvents(Vec<GridEvent>),

    // ─────────────────────────────────────────────────────────
    // Menu Navigation
    // ─────────────────────────────────────────────────────────
    /// Move the menu highlight up one entry
    MenuUp,
    /// Move the menu highlight down one entry
    MenuDown,
    /// Load the highlighted menu entry
    MenuSelect,

    /// Dismiss the completion notification
    DismissNotification,
}
