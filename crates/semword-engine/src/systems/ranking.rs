use std::collections::HashMap;

use crate::api::types::ScoredWord;
use crate::core::keys::{normalize, CleanedKeyMap};
use crate::core::similarity::SimilarityOracle;
use crate::error::{Result, SemwordError};

/// Words closest to a target, one entry per normalized key, best first.
///
/// Drives hints (a joker reveals the entry at `jokers - 1`) and the
/// end-of-game reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    target: String,
    entries: Vec<ScoredWord>,
}

impl Ranking {
    /// Rank the `neighbor_count` nearest neighbours of `target`.
    ///
    /// Neighbour keys are normalized; keys that do not normalize, or that
    /// normalize to the target itself, are dropped. Colliding keys keep their
    /// best score. Equal scores are ordered by word.
    pub fn compute(
        oracle: &dyn SimilarityOracle,
        keys: &CleanedKeyMap,
        target: &str,
        neighbor_count: usize,
    ) -> Result<Self> {
        let target_key = keys
            .get(target)
            .ok_or_else(|| SemwordError::UnknownTarget(target.to_owned()))?;
        let neighbors = oracle
            .most_similar(target_key, neighbor_count)
            .ok_or_else(|| SemwordError::UnknownTarget(target.to_owned()))?;

        let mut best: HashMap<String, f32> = HashMap::with_capacity(neighbors.len());
        for (key, score) in &neighbors {
            if key == target_key {
                continue;
            }
            let Some(word) = normalize(key) else {
                continue;
            };
            if word == target {
                continue;
            }
            best.entry(word.to_owned())
                .and_modify(|kept| *kept = kept.max(*score))
                .or_insert(*score);
        }

        let mut entries: Vec<ScoredWord> = best
            .into_iter()
            .map(|(word, score)| ScoredWord { word, score })
            .collect();
        entries.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.word.cmp(&b.word)));

        log::debug!(
            "ranked {} words out of {} neighbours",
            entries.len(),
            neighbors.len()
        );
        Ok(Self {
            target: target.to_owned(),
            entries,
        })
    }

    /// The word this ranking was computed for.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Score of the closest word, if any.
    pub fn best_score(&self) -> Option<f32> {
        self.entries.first().map(|entry| entry.score)
    }

    /// Entry at a zero-based rank.
    pub fn get(&self, rank: usize) -> Option<&ScoredWord> {
        self.entries.get(rank)
    }

    /// The `n` closest words.
    pub fn top(&self, n: usize) -> &[ScoredWord] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredWord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::animals;
    use std::collections::HashSet;

    fn rank(target: &str, n: usize) -> Ranking {
        let vocab = animals();
        let keys = CleanedKeyMap::build(vocab.keys());
        Ranking::compute(&vocab, &keys, target, n).unwrap()
    }

    #[test]
    fn sorted_non_increasing() {
        let ranking = rank("chat", 1000);
        assert!(ranking
            .iter()
            .collect::<Vec<_>>()
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn excludes_target_and_its_variants() {
        let ranking = rank("chat", 1000);
        assert!(ranking.iter().all(|e| e.word != "chat"));
        // chat-huant stems to the target
        assert_eq!(ranking.len(), 5);
    }

    #[test]
    fn collisions_keep_best_score() {
        let ranking = rank("chat", 1000);
        let words: HashSet<&str> = ranking.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words.len(), ranking.len());

        let chien = ranking.get(0).unwrap();
        assert_eq!(chien.word, "chien");
        // chien_NC [0.95, 0.05] beats chien [0.9, 0.1]
        let expected = 0.95 / (0.95f32 * 0.95 + 0.05 * 0.05).sqrt();
        assert!((chien.score - expected).abs() < 1e-5);
    }

    #[test]
    fn drops_keys_that_do_not_normalize() {
        let ranking = rank("chat", 1000);
        assert!(ranking.iter().all(|e| !e.word.contains('\'')));
    }

    #[test]
    fn ties_ordered_by_word() {
        let ranking = rank("chat", 1000);
        let words: Vec<&str> = ranking.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["chien", "félin", "route", "maison", "voiture"]);
    }

    #[test]
    fn neighbour_count_limits_the_ranking() {
        let ranking = rank("chat", 3);
        // chien_NC, chien, chat-huant -> only "chien" survives
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking.top(10).len(), 1);
    }

    #[test]
    fn unknown_target_is_an_error() {
        let vocab = animals();
        let keys = CleanedKeyMap::build(vocab.keys());
        let err = Ranking::compute(&vocab, &keys, "licorne", 10).unwrap_err();
        assert!(matches!(err, SemwordError::UnknownTarget(_)));
    }
}
