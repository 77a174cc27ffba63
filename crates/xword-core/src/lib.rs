//! # xword-core - Core Domain Types
//!
//! Foundation crate for xword. Provides the puzzle document model, error
//! handling, elapsed-time formatting, and logging setup.
//!
//! No other xword crate is a dependency here.
//!
//! ## Public API
//!
//! ### Puzzle Documents (`puzzle`)
//! - [`PuzzleData`] - Clues keyed by direction and number, plus optional circles
//! - [`ClueEntry`] - A single clue with its answer and starting cell
//! - [`Direction`] - `Across` or `Down`
//!
//! ### Time (`time`)
//! - [`format_elapsed()`] - Render elapsed seconds as `HH:MM:SS` / `MM:SS`
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Catalog, session and persistence failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use xword_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod puzzle;
pub mod time;

/// Prelude for common imports used throughout all xword crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use puzzle::{ClueEntry, Direction, PuzzleData, MAX_CLUE_NUMBER, MAX_GRID_SIZE};
pub use time::format_elapsed;
