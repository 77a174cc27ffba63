//! xword - Solve crossword puzzles in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use xword_app::config::{self, Settings};
use xword_app::{storage, Catalog};
use xword_core::prelude::*;

/// xword - Solve crossword puzzles in the terminal
#[derive(Parser, Debug)]
#[command(name = "xword")]
#[command(about = "Solve crossword puzzles in the terminal", long_about = None)]
struct Args {
    /// Puzzle to open first (see --list)
    #[arg(long, value_name = "ID")]
    puzzle: Option<String>,

    /// Directory of additional *.json puzzles
    #[arg(long, value_name = "DIR")]
    puzzles: Option<PathBuf>,

    /// Config file (default: ~/.config/xword/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Keep timers and entries in memory only
    #[arg(long)]
    no_persist: bool,

    /// Print the available puzzles and exit
    #[arg(long)]
    list: bool,
}

impl Args {
    /// Command-line flags win over the config file
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(id) = &self.puzzle {
            settings.behavior.start_puzzle = Some(id.clone());
        }
        if let Some(dir) = &self.puzzles {
            settings.catalog.puzzle_dir = Some(dir.clone());
        }
        if self.no_persist {
            settings.storage.enabled = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    xword_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    args.apply_to(&mut settings);

    let catalog = match Catalog::load(&settings.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load puzzles: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if args.list {
        for puzzle in catalog.list() {
            println!("{:<16} {}", puzzle.id, puzzle.label);
        }
        return Ok(());
    }

    if let Some(id) = &args.puzzle {
        if let Err(e) = catalog.get(id) {
            eprintln!("❌ {}", e);
            eprintln!("   Run `xword --list` to see the available puzzles.");
            std::process::exit(1);
        }
    }

    info!("Catalog has {} puzzle(s)", catalog.len());
    let store = storage::open_store(&settings.storage);

    let result = xword_tui::run(catalog, settings, store).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let args = Args::parse_from([
            "xword",
            "--puzzle",
            "easy",
            "--puzzles",
            "/tmp/puzzles",
            "--no-persist",
        ]);
        let mut settings = Settings::default();

        args.apply_to(&mut settings);

        assert_eq!(settings.behavior.start_puzzle.as_deref(), Some("easy"));
        assert_eq!(
            settings.catalog.puzzle_dir,
            Some(PathBuf::from("/tmp/puzzles"))
        );
        assert!(!settings.storage.enabled);
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let args = Args::parse_from(["xword"]);
        let mut settings = Settings::default();
        settings.behavior.start_puzzle = Some("cpu".into());

        args.apply_to(&mut settings);

        assert_eq!(settings.behavior.start_puzzle.as_deref(), Some("cpu"));
        assert!(settings.storage.enabled);
    }
}
