//! xword-app - Application state and session control for xword
//!
//! Implements the TEA (The Elm Architecture) pattern: [`Message`]s flow through
//! [`handler::update`], which mutates [`AppState`] and hands timer actions to
//! the event loop. Also owns the puzzle catalog, configuration, the grid
//! widget, and persistence.

pub mod actions;
pub mod catalog;
pub mod config;
pub mod confirm_dialog;
pub mod grid;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod session;
pub mod signals;
pub mod state;
pub mod storage;
pub mod timer;

// Re-export primary types
pub use actions::TimerScheduler;
pub use catalog::{Catalog, PuzzleDescriptor};
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use session::{RunStatus, SessionState};
pub use state::{AppState, UiMode};
pub use timer::TimerService;
