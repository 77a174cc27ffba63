//! Custom widgets for the TUI

pub mod clue_bar;
pub mod clue_list;
pub mod confirm_dialog;
pub mod crossword_grid;
pub mod header;
pub mod modal_overlay;
pub mod notification;
pub mod puzzle_menu;

pub use clue_bar::ClueBar;
pub use clue_list::ClueLists;
pub use confirm_dialog::ConfirmDialog;
pub use crossword_grid::CrosswordGridView;
pub use header::Toolbar;
pub use notification::Notification;
pub use puzzle_menu::PuzzleMenu;
