use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::api::types::Difficulty;
use crate::assets::manifest::AssetManifest;
use crate::assets::word_list::WordList;

/// Registry of word list files, built from an AssetManifest.
/// Resolves manifest paths against an asset root and loads lists on demand.
pub struct WordListRegistry {
    paths: HashMap<Difficulty, PathBuf>,
}

impl WordListRegistry {
    pub fn new() -> Self {
        Self {
            paths: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    /// Entries with an unknown difficulty code are skipped.
    pub fn from_manifest(manifest: &AssetManifest, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let mut paths = HashMap::with_capacity(manifest.word_lists.len());
        for (code, path) in &manifest.word_lists {
            match code.parse::<Difficulty>() {
                Ok(mode) => {
                    paths.insert(mode, root.join(path));
                }
                Err(_) => log::warn!("ignoring word list for unknown difficulty {code:?}"),
            }
        }
        Self { paths }
    }

    /// Resolved path for a difficulty. Returns None if not configured.
    pub fn path(&self, mode: Difficulty) -> Option<&Path> {
        self.paths.get(&mode).map(PathBuf::as_path)
    }

    /// Load the list for a difficulty. Unconfigured or unreadable lists are empty.
    pub fn load(&self, mode: Difficulty) -> WordList {
        match self.path(mode) {
            Some(path) => WordList::load(path),
            None => {
                log::warn!("no word list configured for difficulty '{mode}'");
                WordList::default()
            }
        }
    }
}

impl Default for WordListRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_from_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("easy.txt"), "chat\nchien\n").unwrap();
        let json = r#"{
            "model": { "path": "m.bin" },
            "word_lists": { "f": "easy.txt", "d": "hard.txt", "q": "bogus.txt" }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        let reg = WordListRegistry::from_manifest(&manifest, dir.path());

        assert_eq!(reg.path(Difficulty::Easy), Some(dir.path().join("easy.txt").as_path()));
        assert_eq!(reg.load(Difficulty::Easy).len(), 2);
        // configured but absent on disk
        assert!(reg.load(Difficulty::Hard).is_empty());
    }

    #[test]
    fn unconfigured_difficulty_is_empty() {
        let reg = WordListRegistry::new();
        assert!(reg.path(Difficulty::Easy).is_none());
        assert!(reg.load(Difficulty::Easy).is_empty());
    }
}
