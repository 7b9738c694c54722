use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::game::GameConfig;
use crate::api::types::Difficulty;
use crate::error::{Result, SemwordError};

/// Default model artifact, a French word2vec model.
pub const DEFAULT_MODEL_PATH: &str = "models/frWac_no_postag_no_phrase_700_skip_cut50.bin";
/// Where the default model is published.
pub const DEFAULT_MODEL_URL: &str =
    "https://embeddings.net/embeddings/frWac_no_postag_no_phrase_700_skip_cut50.bin";

/// Asset manifest describing the model and the word lists of a deployment.
/// Loaded from a JSON file at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// The embedding model artifact.
    pub model: ModelDescriptor,
    /// Word list path per difficulty code (`"f"`, `"d"`).
    #[serde(default)]
    pub word_lists: BTreeMap<String, String>,
    /// Game tuning. Missing fields take their defaults.
    #[serde(default)]
    pub game: GameConfig,
}

/// Describes the embedding model file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Relative path to the word2vec binary file.
    pub path: String,
    /// Where to fetch the file from when it is absent. Informational only.
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        let word_lists = [Difficulty::Easy, Difficulty::Hard]
            .into_iter()
            .map(|mode| (mode.to_string(), format!("data/interest_words_{mode}.txt")))
            .collect();
        Self {
            model: ModelDescriptor {
                path: DEFAULT_MODEL_PATH.to_owned(),
                url: Some(DEFAULT_MODEL_URL.to_owned()),
            },
            word_lists,
            game: GameConfig::default(),
        }
    }
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SemwordError::Manifest)
    }

    /// Read and parse a manifest file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Configured word list path for a difficulty.
    pub fn word_list_path(&self, mode: Difficulty) -> Option<&str> {
        self.word_lists.get(&mode.to_string()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{ "model": { "path": "models/tiny.bin" } }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.model.path, "models/tiny.bin");
        assert_eq!(manifest.model.url, None);
        assert!(manifest.word_lists.is_empty());
        assert_eq!(manifest.game, GameConfig::default());
    }

    #[test]
    fn parse_manifest_with_lists_and_tuning() {
        let json = r#"{
            "model": { "path": "m.bin", "url": "https://example.org/m.bin" },
            "word_lists": { "f": "lists/easy.txt", "d": "lists/hard.txt" },
            "game": { "jokers": 10 }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.word_list_path(Difficulty::Easy), Some("lists/easy.txt"));
        assert_eq!(manifest.word_list_path(Difficulty::Hard), Some("lists/hard.txt"));
        assert_eq!(manifest.game.jokers, 10);
        assert_eq!(manifest.game.neighbor_count, 1000);
    }

    #[test]
    fn default_points_at_bundled_assets() {
        let manifest = AssetManifest::default();
        assert_eq!(manifest.model.path, DEFAULT_MODEL_PATH);
        assert_eq!(
            manifest.word_list_path(Difficulty::Easy),
            Some("data/interest_words_f.txt")
        );
    }

    #[test]
    fn malformed_json_is_manifest_error() {
        let err = AssetManifest::from_json("{ model: ").unwrap_err();
        assert!(matches!(err, SemwordError::Manifest(_)));
    }
}
