//! Configuration file parsing for xword
//!
//! Settings live in `~/.config/xword/config.toml` unless a path is given on
//! the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings};
pub use types::*;
