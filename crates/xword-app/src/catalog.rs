//! Puzzle catalog - the fixed list of puzzles offered by the selector
//!
//! The catalog is assembled once at startup from the bundled puzzles and an
//! optional user directory of `*.json` documents. It never changes afterwards.

use std::path::Path;
use std::sync::Arc;

use xword_core::prelude::*;
use xword_core::PuzzleData;

use crate::config::CatalogSettings;

/// Puzzles compiled into the binary: `(identifier, label, json)`
const BUNDLED: &[(&str, &str, &str)] = &[
    ("cpu", "CS", include_str!("../puzzles/cpu.json")),
    ("easy", "Easy", include_str!("../puzzles/easy.json")),
];

/// One selectable puzzle
#[derive(Debug, Clone)]
pub struct PuzzleDescriptor {
    /// Unique identifier, also the root of every storage key for this puzzle
    pub id: String,
    /// Display label for the selector
    pub label: String,
    pub data: Arc<PuzzleData>,
}

impl PuzzleDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>, data: PuzzleData) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            data: Arc::new(data),
        }
    }
}

/// Ordered, immutable list of puzzles
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<PuzzleDescriptor>,
}

impl Catalog {
    /// Build a catalog from explicit entries. Later duplicates of an id are dropped.
    pub fn new(entries: Vec<PuzzleDescriptor>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            catalog.push(entry);
        }
        catalog
    }

    /// Catalog containing only the bundled puzzles
    pub fn bundled() -> Self {
        let mut catalog = Self::default();
        for (id, label, json) in BUNDLED {
            match PuzzleData::from_json(id, json) {
                Ok(data) => {
                    catalog.push(PuzzleDescriptor::new(*id, *label, data));
                }
                Err(e) => error!("Bundled puzzle '{}' is invalid: {}", id, e),
            }
        }
        catalog
    }

    /// Assemble the catalog described by the settings
    pub fn load(settings: &CatalogSettings) -> Result<Self> {
        let mut catalog = if settings.include_bundled {
            Self::bundled()
        } else {
            Self::default()
        };

        if let Some(dir) = &settings.puzzle_dir {
            let added = catalog.load_dir(dir)?;
            info!("Loaded {} puzzle(s) from {}", added, dir.display());
        }

        Ok(catalog)
    }

    /// Add every parseable `*.json` file in `dir`, ordered by file name.
    ///
    /// Returns the number of puzzles added. Files that fail to parse are
    /// logged and skipped.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Err(Error::PuzzleDirNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut added = 0;
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let file_name = path.display().to_string();

            let json = match std::fs::read_to_string(&path) {
                Ok(json) => json,
                Err(e) => {
                    warn!("Failed to read {}: {}", file_name, e);
                    continue;
                }
            };

            match PuzzleData::from_json(&file_name, &json) {
                Ok(data) => {
                    let label = data.title.clone().unwrap_or_else(|| stem.to_string());
                    if self.push(PuzzleDescriptor::new(stem, label, data)) {
                        added += 1;
                    }
                }
                Err(e) => warn!("Skipping puzzle: {}", e),
            }
        }

        Ok(added)
    }

    fn push(&mut self, entry: PuzzleDescriptor) -> bool {
        if self.position(&entry.id).is_some() {
            warn!("Duplicate puzzle id '{}' ignored", entry.id);
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn list(&self) -> &[PuzzleDescriptor] {
        &self.entries
    }

    /// Look up a puzzle by identifier
    pub fn get(&self, id: &str) -> Result<&PuzzleDescriptor> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| Error::puzzle_not_found(id))
    }

    pub fn first(&self) -> Option<&PuzzleDescriptor> {
        self.entries.first()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const TINY: &str = r#"{
        "across": { "1": { "clue": "Greeting", "answer": "HI", "row": 0, "col": 0 } }
    }"#;

    #[test]
    fn test_bundled_catalog_order() {
        let catalog = Catalog::bundled();
        let ids: Vec<_> = catalog.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["cpu", "easy"]);
        assert_eq!(catalog.first().unwrap().label, "CS");
    }

    #[test]
    fn test_every_bundled_puzzle_loads() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.list().len(), BUNDLED.len());
        for (id, label, _) in BUNDLED {
            assert_eq!(catalog.get(id).unwrap().label, *label);
        }
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let catalog = Catalog::bundled();
        let err = catalog.get("missing").unwrap_err();
        assert!(matches!(err, Error::PuzzleNotFound { ref id } if id == "missing"));
    }

    #[test]
    fn test_load_dir_uses_stem_and_title() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b-hello.json"), TINY).unwrap();
        std::fs::write(
            dir.path().join("a-titled.json"),
            TINY.replacen('{', r#"{ "title": "Titled Puzzle","#, 1),
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

        let mut catalog = Catalog::default();
        let added = catalog.load_dir(dir.path()).unwrap();

        assert_eq!(added, 2);
        assert_eq!(catalog.list()[0].id, "a-titled");
        assert_eq!(catalog.list()[0].label, "Titled Puzzle");
        assert_eq!(catalog.list()[1].id, "b-hello");
        assert_eq!(catalog.list()[1].label, "b-hello");
    }

    #[test]
    fn test_load_dir_skips_invalid_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("good.json"), TINY).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

        let mut catalog = Catalog::default();
        assert_eq!(catalog.load_dir(dir.path()).unwrap(), 1);
        assert!(catalog.get("good").is_ok());
        assert!(catalog.get("bad").is_err());
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let mut catalog = Catalog::default();
        let err = catalog
            .load_dir(&PathBuf::from("/definitely/not/here"))
            .unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("easy.json"), TINY).unwrap();

        let mut catalog = Catalog::bundled();
        assert_eq!(catalog.load_dir(dir.path()).unwrap(), 0);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("easy").unwrap().label, "Easy");
    }

    #[test]
    fn test_load_without_bundled_can_be_empty() {
        let settings = CatalogSettings {
            include_bundled: false,
            puzzle_dir: None,
        };
        let catalog = Catalog::load(&settings).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.first().is_none());
    }
}
