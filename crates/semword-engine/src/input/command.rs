use std::str::FromStr;

use crate::error::SemwordError;

/// Sentinel submitted to give up.
pub const QUIT_CODE: &str = "0000";
/// Sentinel submitted to spend a joker.
pub const JOKER_CODE: &str = "5555";
/// Sentinel submitted to reveal the answer.
pub const REVEAL_CODE: &str = "9999";

/// What the player asked for with one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Joker,
    Reveal,
    Guess(String),
}

impl Command {
    /// Parse raw form text. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, SemwordError> {
        match raw.trim() {
            "" => Err(SemwordError::EmptyInput),
            QUIT_CODE => Ok(Command::Quit),
            JOKER_CODE => Ok(Command::Joker),
            REVEAL_CODE => Ok(Command::Reveal),
            word => Ok(Command::Guess(word.to_owned())),
        }
    }
}

impl FromStr for Command {
    type Err = SemwordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}
