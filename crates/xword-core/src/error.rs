//! Error types shared by every xword crate

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────
    #[error("No puzzle with identifier '{id}' in the catalog")]
    PuzzleNotFound { id: String },

    #[error("Failed to parse puzzle {source_name}: {message}")]
    PuzzleParse {
        source_name: String,
        message: String,
    },

    #[error("Puzzle directory not found: {path}")]
    PuzzleDirNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────
    /// A controller action arrived before any puzzle was selected
    #[error("No puzzle session is loaded yet")]
    SessionNotLoaded,

    #[error("Persistence store unavailable: {reason}")]
    PersistenceUnavailable { reason: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn puzzle_not_found(id: impl Into<String>) -> Self {
        Self::PuzzleNotFound { id: id.into() }
    }

    pub fn puzzle_parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PuzzleParse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn persistence_unavailable(reason: impl Into<String>) -> Self {
        Self::PersistenceUnavailable {
            reason: reason.into(),
        }
    }

    /// Errors that stop the app before the first frame is drawn
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Terminal { .. } | Error::PuzzleDirNotFound { .. }
        )
    }
}
