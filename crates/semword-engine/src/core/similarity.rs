use crate::core::vocabulary::Vocabulary;

/// The embedding lookup service the game scores against.
pub trait SimilarityOracle: Send + Sync {
    /// Iterate over vocabulary keys in index order.
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Cosine similarity between two vocabulary keys, in [-1, 1].
    /// `None` if either key is unknown.
    fn similarity(&self, a: &str, b: &str) -> Option<f32>;

    /// Up to `topn` keys closest to `key`, best first, `key` itself excluded.
    /// `None` if `key` is unknown.
    fn most_similar(&self, key: &str, topn: usize) -> Option<Vec<(String, f32)>>;
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

impl SimilarityOracle for Vocabulary {
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(Vocabulary::keys(self))
    }

    fn similarity(&self, a: &str, b: &str) -> Option<f32> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Some(dot(self.vector(a), self.vector(b)))
    }

    fn most_similar(&self, key: &str, topn: usize) -> Option<Vec<(String, f32)>> {
        let query = self.index_of(key)?;
        if topn == 0 {
            return Some(Vec::new());
        }
        let target = self.vector(query);

        let mut scored: Vec<(usize, f32)> = (0..self.len())
            .filter(|&i| i != query)
            .map(|i| (i, dot(target, self.vector(i))))
            .collect();

        let by_score =
            |a: &(usize, f32), b: &(usize, f32)| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0));
        if scored.len() > topn {
            scored.select_nth_unstable_by(topn - 1, by_score);
            scored.truncate(topn);
        }
        scored.sort_unstable_by(by_score);

        Some(
            scored
                .into_iter()
                .filter_map(|(i, score)| self.key(i).map(|k| (k.to_owned(), score)))
                .collect(),
        )
    }
}
