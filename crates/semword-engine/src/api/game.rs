use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::api::types::{Difficulty, GameStatus, Outcome, Tone};
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::WordListRegistry;
use crate::assets::word_list::WordList;
use crate::components::session::Session;
use crate::core::keys::CleanedKeyMap;
use crate::core::similarity::SimilarityOracle;
use crate::core::vocabulary::Vocabulary;
use crate::error::{Result, SemwordError};
use crate::input::command::Command;
use crate::systems::ranking::Ranking;
use crate::systems::scoring::{proximity, score_guess};
use crate::systems::selector::select_target;

/// Tuning for a game, usually read from the asset manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Jokers granted at the start of a session (default: 100).
    pub jokers: u32,
    /// Nearest neighbours requested when ranking a target (default: 1000).
    pub neighbor_count: usize,
    /// Ranked words shown when a session ends (default: 100).
    pub reveal_count: usize,
    /// Lower bound of the proximity gauge and of a "good" hint (default: 0.25).
    pub hint_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            jokers: 100,
            neighbor_count: 1000,
            reveal_count: 100,
            hint_threshold: 0.25,
        }
    }
}

/// Shared, read-only game context: the embedding oracle, its cleaned key
/// map and the tuning. Sessions and rankings are passed in by the caller.
#[derive(Clone)]
pub struct WordGame {
    oracle: Arc<dyn SimilarityOracle>,
    keys: Arc<CleanedKeyMap>,
    config: GameConfig,
}

impl WordGame {
    /// Build the context, deriving the cleaned key map from the oracle's keys.
    pub fn new(oracle: Arc<dyn SimilarityOracle>, config: GameConfig) -> Self {
        let keys = CleanedKeyMap::build(oracle.keys());
        log::info!("cleaned key map built: {} playable words", keys.len());
        Self {
            oracle,
            keys: Arc::new(keys),
            config,
        }
    }

    pub fn from_vocabulary(vocabulary: Vocabulary, config: GameConfig) -> Self {
        Self::new(Arc::new(vocabulary), config)
    }

    /// Load the model and word lists named by a manifest file on disk.
    /// Manifest paths are relative to the manifest's directory.
    pub fn open(manifest_path: impl AsRef<Path>) -> Result<(Self, WordListRegistry)> {
        let manifest_path = manifest_path.as_ref();
        let manifest = AssetManifest::load(manifest_path)?;
        let root = manifest_path.parent().unwrap_or(Path::new(""));
        let vocabulary = Vocabulary::load(root.join(&manifest.model.path))?;
        let registry = WordListRegistry::from_manifest(&manifest, root);
        Ok((Self::from_vocabulary(vocabulary, manifest.game), registry))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn keys(&self) -> &CleanedKeyMap {
        &self.keys
    }

    /// Rank the neighbours of a target word.
    pub fn ranking(&self, target: &str) -> Result<Ranking> {
        Ranking::compute(
            self.oracle.as_ref(),
            &self.keys,
            target,
            self.config.neighbor_count,
        )
    }

    /// Start a session: pick a target from `words`, rank it and record the
    /// best score as the session's max similarity.
    pub fn start<R: Rng + ?Sized>(
        &self,
        mode: Difficulty,
        words: &WordList,
        rng: &mut R,
    ) -> Result<(Session, Ranking)> {
        let target = select_target(words, &self.keys, rng)
            .ok_or(SemwordError::NoTargetWord(mode.code()))?;
        let ranking = self.ranking(&target)?;
        let max_similarity = ranking.best_score().unwrap_or(1.0);
        log::info!(
            "new game: difficulty '{mode}', {} ranked words, max similarity {max_similarity:.4}",
            ranking.len()
        );
        let session = Session::new(mode, target, self.config.jokers, max_similarity);
        Ok((session, ranking))
    }

    /// Parse raw form text and apply it.
    pub fn submit(
        &self,
        session: &mut Session,
        ranking: &Ranking,
        raw: &str,
    ) -> Result<Outcome> {
        let command = Command::parse(raw)?;
        self.apply(session, ranking, command)
    }

    /// Apply one command. `ranking` must be the ranking of the session's target.
    pub fn apply(
        &self,
        session: &mut Session,
        ranking: &Ranking,
        command: Command,
    ) -> Result<Outcome> {
        if session.is_finished() {
            return Err(SemwordError::GameOver);
        }
        if ranking.target() != session.target_word {
            return Err(SemwordError::RankingMismatch {
                expected: session.target_word.clone(),
                found: ranking.target().to_owned(),
            });
        }

        match command {
            Command::Quit => Ok(self.finish(session, ranking, GameStatus::Quit)),
            Command::Reveal => Ok(self.finish(session, ranking, GameStatus::Revealed)),
            Command::Joker => Ok(self.joker(session, ranking)),
            Command::Guess(word) => Ok(self.guess(session, ranking, word)),
        }
    }

    fn guess(&self, session: &mut Session, ranking: &Ranking, word: String) -> Outcome {
        let Some(score) = score_guess(self.oracle.as_ref(), &self.keys, &word, &session.target_word)
        else {
            return Outcome::UnknownWord { word };
        };
        if word == session.target_word {
            return self.finish(session, ranking, GameStatus::Won);
        }
        session.record(word.clone(), score);
        Outcome::Scored {
            proximity: proximity(score, session.max_similarity, self.config.hint_threshold),
            word,
            score,
        }
    }

    fn joker(&self, session: &mut Session, ranking: &Ranking) -> Outcome {
        let Some(index) = session.jokers.checked_sub(1) else {
            return Outcome::NoJokersLeft;
        };
        let Some(hint) = ranking.get(index as usize) else {
            return Outcome::NoMoreHints;
        };
        session.jokers = index;
        session.record(hint.word.clone(), hint.score);
        Outcome::Hint {
            word: hint.word.clone(),
            score: hint.score,
            jokers_left: session.jokers,
        }
    }

    fn finish(&self, session: &mut Session, ranking: &Ranking, status: GameStatus) -> Outcome {
        session.status = status;
        log::info!("game over: {status:?} after {} guesses", session.guesses.len());
        Outcome::Finished {
            status,
            target_word: session.target_word.clone(),
            closest: ranking.top(self.config.reveal_count).to_vec(),
        }
    }

    /// How the page should style an outcome.
    pub fn tone(&self, outcome: &Outcome) -> Tone {
        match outcome {
            Outcome::Hint { score, .. } if *score >= self.config.hint_threshold => Tone::Success,
            Outcome::Hint { .. } | Outcome::Scored { .. } => Tone::Neutral,
            Outcome::NoJokersLeft | Outcome::NoMoreHints => Tone::Warning,
            Outcome::UnknownWord { .. } => Tone::Danger,
            Outcome::Finished {
                status: GameStatus::Won,
                ..
            } => Tone::Success,
            Outcome::Finished { .. } => Tone::Neutral,
        }
    }
}
