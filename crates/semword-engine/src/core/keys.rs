use std::collections::HashMap;

/// Text before the first `_` or `-` of a vocabulary key.
///
/// `"chien_NC"` and `"chien-loup"` both stem to `"chien"`.
pub fn stem(key: &str) -> &str {
    match key.find(['_', '-']) {
        Some(idx) => &key[..idx],
        None => key,
    }
}

/// Lookup key for a raw vocabulary key.
///
/// Returns `None` when the stem is empty, holds an apostrophe, or has any
/// character that is not alphanumeric. Idempotent on its own output.
pub fn normalize(key: &str) -> Option<&str> {
    let stem = stem(key);
    let valid = !stem.is_empty()
        && !stem.contains('\'')
        && stem.chars().all(char::is_alphanumeric);
    valid.then_some(stem)
}

/// Normalized lookup key → original vocabulary key.
///
/// Built once from the vocabulary in index order. When several keys share a
/// normalized form, the last one wins.
#[derive(Debug, Clone, Default)]
pub struct CleanedKeyMap {
    keys: HashMap<String, String>,
}

impl CleanedKeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from vocabulary keys, in vocabulary order.
    pub fn build<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = HashMap::new();
        for key in keys {
            if let Some(clean) = normalize(key) {
                map.insert(clean.to_owned(), key.to_owned());
            }
        }
        Self { keys: map }
    }

    /// Original vocabulary key for a player-facing word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.keys.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.keys.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_cuts_at_first_separator() {
        assert_eq!(stem("chien_NC"), "chien");
        assert_eq!(stem("chat-huant"), "chat");
        assert_eq!(stem("arc-en_ciel"), "arc");
        assert_eq!(stem("maison"), "maison");
        assert_eq!(stem("_x"), "");
    }

    #[test]
    fn normalize_rejects_non_alphanumeric() {
        assert_eq!(normalize("félin"), Some("félin"));
        assert_eq!(normalize("l'animal"), None);
        assert_eq!(normalize("a.b"), None);
        assert_eq!(normalize("-x"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("2024_ADJ"), Some("2024"));
    }

    #[test]
    fn normalize_is_idempotent() {
        for key in ["chien_NC", "chat-huant", "voiture", "été_ADV", "x1-y"] {
            let once = normalize(key).unwrap();
            assert_eq!(normalize(once), Some(once));
        }
    }

    #[test]
    fn last_write_wins_on_collision() {
        let map = CleanedKeyMap::build(["chien", "chien_NC", "l'ami", "chat"]);
        assert_eq!(map.get("chien"), Some("chien_NC"));
        assert_eq!(map.get("chat"), Some("chat"));
        assert!(!map.contains("l'ami"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn lookup_is_not_normalized() {
        let map = CleanedKeyMap::build(["chien_NC"]);
        assert!(map.get("chien_NC").is_none());
        assert!(map.get("chien").is_some());
    }
}
