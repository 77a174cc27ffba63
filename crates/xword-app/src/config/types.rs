//! Configuration types for xword
//!
//! Defines `Settings` and its sections. Every field has a default so a
//! partial (or missing) config file is always valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Startup behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Puzzle id to open first (falls back to the first catalog entry)
    #[serde(default)]
    pub start_puzzle: Option<String>,
}

/// Progress persistence
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Persist timers and entries between runs
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Store file (defaults to the platform data directory)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

/// Puzzle sources
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Offer the puzzles compiled into the binary
    #[serde(default = "default_true")]
    pub include_bundled: bool,

    /// Extra directory of `*.json` puzzles
    #[serde(default)]
    pub puzzle_dir: Option<PathBuf>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            include_bundled: true,
            puzzle_dir: None,
        }
    }
}

/// Display options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_true")]
    pub show_timer: bool,

    #[serde(default = "default_true")]
    pub show_clue_lists: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_timer: true,
            show_clue_lists: true,
        }
    }
}

fn default_true() -> bool {
    true
}
