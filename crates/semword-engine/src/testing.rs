//! Shared fixtures for unit tests.

use crate::core::vocabulary::Vocabulary;

/// Small 3-d vocabulary around "chat".
///
/// - `chat-huant` comes first so `chat` owns the cleaned key.
/// - `chien` and `chien_NC` collide; `chien_NC` wins the key map and scores higher.
/// - `l'animal` never normalizes.
pub fn animals() -> Vocabulary {
    let entries: [(&str, [f32; 3]); 9] = [
        ("chat-huant", [0.99, 0.01, 0.0]),
        ("chat", [1.0, 0.0, 0.0]),
        ("chien", [0.9, 0.1, 0.0]),
        ("chien_NC", [0.95, 0.05, 0.0]),
        ("félin", [0.8, 0.2, 0.0]),
        ("l'animal", [0.7, 0.3, 0.0]),
        ("voiture", [0.0, 1.0, 0.0]),
        ("maison", [0.0, 0.0, 1.0]),
        ("route", [0.1, 0.9, 0.0]),
    ];
    Vocabulary::from_entries(
        3,
        entries
            .into_iter()
            .map(|(key, vector)| (key.to_owned(), vector.to_vec())),
    )
    .unwrap()
}
