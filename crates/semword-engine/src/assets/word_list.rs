use std::path::Path;

/// Curated candidate targets, one word per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse newline-delimited text. Lines are trimmed; blank lines dropped.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { words }
    }

    /// Read a list from disk. A missing or unreadable file yields an empty
    /// list and a warning; the caller decides what an empty list means.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let list = Self::parse(&text);
                log::debug!("{} words read from {}", list.len(), path.display());
                list
            }
            Err(err) => {
                log::warn!("word list {} unavailable: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
