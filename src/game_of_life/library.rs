//! Persistent named-pattern store backed by a single JSON file

use super::placement::ExplicitCells;
use crate::error::{LifeError, LifeResult};
use log::{info, warn};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name shown for the hand-edited layout; synthesized at listing time and never stored
pub const MANUAL_PATTERN: &str = "Set by hand";

/// Mapping of pattern name to its explicit alive cells
pub type PatternMap = BTreeMap<String, ExplicitCells>;

/// Pattern library file handle.
///
/// The file holds one JSON object whose values are arrays of `[row, col]`
/// pairs. A missing or unreadable file behaves like an empty library.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    path: PathBuf,
}

impl PatternLibrary {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored pattern; absence or corruption yields an empty mapping
    pub fn load_all(&self) -> PatternMap {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Pattern library {} unavailable: {}", self.path.display(), e);
                return PatternMap::new();
            }
        };

        match serde_json::from_str::<PatternMap>(&content) {
            Ok(patterns) => patterns,
            Err(e) => {
                warn!("Pattern library {} is malformed: {}", self.path.display(), e);
                PatternMap::new()
            }
        }
    }

    /// Look up a single stored pattern
    pub fn get(&self, name: &str) -> Option<ExplicitCells> {
        self.load_all().remove(name)
    }

    /// Merge `name` into the stored mapping and rewrite the file as a whole
    pub fn save(&self, name: &str, cells: &[(i64, i64)]) -> LifeResult<()> {
        if name == MANUAL_PATTERN {
            return Err(LifeError::ReservedName(name.to_string()));
        }

        let mut patterns = self.load_all();
        patterns.insert(name.to_string(), cells.to_vec());

        self.write_atomically(&patterns)
            .map_err(|source| LifeError::Persistence {
                path: self.path.clone(),
                source,
            })?;

        info!(
            "Saved pattern '{}' ({} cells) to {}",
            name,
            cells.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Sentinel name first, then every stored name
    pub fn list_names(&self) -> Vec<String> {
        std::iter::once(MANUAL_PATTERN.to_string())
            .chain(self.load_all().into_keys())
            .collect()
    }

    fn write_atomically(&self, patterns: &PatternMap) -> std::io::Result<()> {
        let content = serde_json::to_string_pretty(patterns)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        // Same directory as the target so the rename never crosses filesystems
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
