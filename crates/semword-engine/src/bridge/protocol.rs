//! JSON payloads exchanged with the page script.
//! Must stay in sync with the page's `protocol.ts`.
//!
//! ```text
//! start_game  -> StartReply
//! submit      -> SubmitReply
//! history     -> [ScoredWord]
//! ```

use serde::Serialize;

use crate::api::game::WordGame;
use crate::api::types::{Difficulty, GameStatus, Outcome, ScoredWord, Tone};
use crate::components::session::Session;

/// Protocol version sent with every reply.
pub const PROTOCOL_VERSION: u32 = 1;

/// Reply to a new game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartReply {
    pub version: u32,
    pub mode: Difficulty,
    pub jokers: u32,
    pub max_similarity: f32,
}

impl StartReply {
    pub fn new(session: &Session) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            mode: session.mode,
            jokers: session.jokers,
            max_similarity: session.max_similarity,
        }
    }
}

/// Reply to one submission: the outcome plus the state the page redraws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitReply {
    pub version: u32,
    pub outcome: Outcome,
    /// Player-facing message for the outcome.
    pub message: String,
    pub tone: Tone,
    pub jokers: u32,
    pub status: GameStatus,
    /// Guess history, best first.
    pub history: Vec<ScoredWord>,
}

impl SubmitReply {
    pub fn new(game: &WordGame, session: &Session, outcome: Outcome) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            message: outcome.to_string(),
            tone: game.tone(&outcome),
            outcome,
            jokers: session.jokers,
            status: session.status,
            history: session.history(),
        }
    }
}
