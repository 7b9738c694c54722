pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod error;

#[cfg(test)]
mod testing;

// Re-export key types at crate root for convenience
pub use api::game::{GameConfig, WordGame};
pub use api::types::{Difficulty, GameStatus, Outcome, ScoredWord, Tone};
pub use components::session::Session;
pub use crate::core::keys::{normalize, stem, CleanedKeyMap};
pub use crate::core::similarity::SimilarityOracle;
pub use crate::core::vocabulary::Vocabulary;
pub use systems::ranking::Ranking;
pub use systems::scoring::{proximity, score_guess};
pub use systems::selector::select_target;
pub use input::command::{Command, JOKER_CODE, QUIT_CODE, REVEAL_CODE};
pub use assets::manifest::{AssetManifest, ModelDescriptor};
pub use assets::registry::WordListRegistry;
pub use assets::word_list::WordList;
pub use bridge::protocol::{StartReply, SubmitReply, PROTOCOL_VERSION};
pub use error::{Result, SemwordError};
