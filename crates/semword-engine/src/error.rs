use thiserror::Error;

/// Errors raised by the engine.
///
/// Conditions that are part of normal play (an unknown guess, no jokers left)
/// are reported as [`Outcome`](crate::Outcome) values instead.
#[derive(Error, Debug)]
pub enum SemwordError {
    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The embedding model could not be decoded.
    #[error("model error: {0}")]
    Model(String),

    /// Malformed asset manifest.
    #[error("manifest error: {0}")]
    Manifest(#[source] serde_json::Error),

    /// Malformed session snapshot.
    #[error("session error: {0}")]
    Session(#[source] serde_json::Error),

    /// Difficulty code other than `f` or `d`.
    #[error("invalid mode selected: {0:?}")]
    InvalidMode(String),

    /// The word list for this difficulty has no word the model knows.
    #[error("no valid target word for difficulty '{0}'")]
    NoTargetWord(char),

    /// A target word that is missing from the cleaned key map.
    #[error("target word {0:?} is not in the vocabulary")]
    UnknownTarget(String),

    /// Ranking passed with a session whose target it was not computed for.
    #[error("ranking is for {found:?}, session target is {expected:?}")]
    RankingMismatch { expected: String, found: String },

    /// Blank submission.
    #[error("empty input")]
    EmptyInput,

    /// Command sent while no session is loaded.
    #[error("no game in progress")]
    NoSession,

    /// Command sent to a session that already ended.
    #[error("game is over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, SemwordError>;
