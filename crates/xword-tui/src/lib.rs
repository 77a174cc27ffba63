//! xword-tui - Terminal UI for xword
//!
//! This crate provides the ratatui-based terminal interface: it owns the
//! event loop, converts terminal input into app messages, and draws the
//! puzzle from [`xword_app::AppState`].

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
