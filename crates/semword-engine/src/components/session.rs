use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::types::{Difficulty, GameStatus, ScoredWord};
use crate::error::{Result, SemwordError};

/// Per-player game state.
///
/// Plain data: the client holds it between commands as a JSON snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub mode: Difficulty,
    pub target_word: String,
    pub jokers: u32,
    /// Guess history keyed by the word as typed (or as revealed by a hint).
    #[serde(default)]
    pub guesses: BTreeMap<String, f32>,
    /// Best score of the target's ranking.
    pub max_similarity: f32,
    #[serde(default)]
    pub status: GameStatus,
}

impl Session {
    pub fn new(
        mode: Difficulty,
        target_word: impl Into<String>,
        jokers: u32,
        max_similarity: f32,
    ) -> Self {
        Self {
            mode,
            target_word: target_word.into(),
            jokers,
            guesses: BTreeMap::new(),
            max_similarity,
            status: GameStatus::InProgress,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Record a score. A word already present is overwritten.
    pub fn record(&mut self, word: impl Into<String>, score: f32) {
        self.guesses.insert(word.into(), score);
    }

    /// Guess history, best first. Equal scores are ordered by word.
    pub fn history(&self) -> Vec<ScoredWord> {
        let mut history: Vec<ScoredWord> = self
            .guesses
            .iter()
            .map(|(word, &score)| ScoredWord::new(word.clone(), score))
            .collect();
        history.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
        history
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(SemwordError::Session)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SemwordError::Session)
    }
}
