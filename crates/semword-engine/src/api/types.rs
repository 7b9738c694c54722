use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SemwordError;

/// Which curated word list the target is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "f")]
    Easy,
    #[serde(rename = "d")]
    #[default]
    Hard,
}

impl Difficulty {
    /// Single-character code used in forms and file names.
    pub fn code(self) -> char {
        match self {
            Difficulty::Easy => 'f',
            Difficulty::Hard => 'd',
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Difficulty {
    type Err = SemwordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" => Ok(Difficulty::Easy),
            "d" => Ok(Difficulty::Hard),
            other => Err(SemwordError::InvalidMode(other.to_owned())),
        }
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Quit,
    Revealed,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// A word with its similarity to the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: String,
    pub score: f32,
}

impl ScoredWord {
    pub fn new(word: impl Into<String>, score: f32) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Result of applying one command to a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A known guess, recorded in the history.
    Scored {
        word: String,
        score: f32,
        /// Gauge in [1, 999] when the score is within the hint band.
        proximity: Option<f32>,
    },
    /// A joker revealed a ranked word.
    Hint {
        word: String,
        score: f32,
        jokers_left: u32,
    },
    /// The guess is not in the vocabulary. Nothing changed.
    UnknownWord { word: String },
    NoJokersLeft,
    /// The joker would point past the end of the ranking.
    NoMoreHints,
    /// The session ended: won, quit or revealed.
    Finished {
        status: GameStatus,
        target_word: String,
        closest: Vec<ScoredWord>,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Scored { word, score, .. } => write!(f, "{word}: {:.2}%", score * 100.0),
            Outcome::Hint { word, score, .. } => write!(f, "{word}: {:.2}", score * 100.0),
            Outcome::UnknownWord { word } => write!(f, "Je ne connais pas le mot {word}."),
            Outcome::NoJokersLeft => f.write_str("Vous n'avez plus de jokers :("),
            Outcome::NoMoreHints => f.write_str("Plus de mots similaires disponibles."),
            Outcome::Finished {
                status: GameStatus::Won,
                target_word,
                ..
            } => write!(f, "Bravo ! Le mot était {target_word}."),
            Outcome::Finished { target_word, .. } => write!(f, "Le mot était {target_word}."),
        }
    }
}

/// Styling hint for the page, one per outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Neutral,
    Warning,
    Danger,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_codes() {
        assert_eq!("f".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("d".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "x".parse::<Difficulty>(),
            Err(SemwordError::InvalidMode(_))
        ));
        assert_eq!(Difficulty::default().to_string(), "d");
    }

    #[test]
    fn difficulty_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), r#""f""#);
    }

    #[test]
    fn outcome_messages() {
        let scored = Outcome::Scored {
            word: "chien".into(),
            score: 0.4567,
            proximity: None,
        };
        assert_eq!(scored.to_string(), "chien: 45.67%");
        let unknown = Outcome::UnknownWord { word: "zzz".into() };
        assert_eq!(unknown.to_string(), "Je ne connais pas le mot zzz.");
    }

    #[test]
    fn outcome_json_is_tagged() {
        let json = serde_json::to_value(Outcome::NoJokersLeft).unwrap();
        assert_eq!(json["kind"], "no_jokers_left");
        let json = serde_json::to_value(Outcome::Hint {
            word: "félin".into(),
            score: 0.5,
            jokers_left: 3,
        })
        .unwrap();
        assert_eq!(json["kind"], "hint");
        assert_eq!(json["jokers_left"], 3);
    }
}
