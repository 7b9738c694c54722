use crate::core::keys::CleanedKeyMap;
use crate::core::similarity::SimilarityOracle;

/// Lowest gauge value.
pub const PROXIMITY_MIN: f32 = 1.0;
/// Highest gauge value.
pub const PROXIMITY_MAX: f32 = 999.0;

/// Cosine similarity between a guess and the target.
///
/// The guess is looked up as typed in the cleaned key map. `None` means the
/// word is unknown.
pub fn score_guess(
    oracle: &dyn SimilarityOracle,
    keys: &CleanedKeyMap,
    guess: &str,
    target: &str,
) -> Option<f32> {
    let guess_key = keys.get(guess)?;
    let target_key = keys.get(target)?;
    oracle.similarity(guess_key, target_key)
}

/// Position of a score on the 1..=999 gauge between `threshold` and the best
/// score of the ranking, rounded to two decimals.
///
/// Scores outside `[threshold, max_similarity]` have no gauge.
pub fn proximity(score: f32, max_similarity: f32, threshold: f32) -> Option<f32> {
    if score < threshold || score > max_similarity {
        return None;
    }
    if max_similarity <= threshold {
        return Some(PROXIMITY_MAX);
    }
    let normalized = (score - threshold) / (max_similarity - threshold);
    let gauge = (normalized * (PROXIMITY_MAX - PROXIMITY_MIN) + PROXIMITY_MIN)
        .clamp(PROXIMITY_MIN, PROXIMITY_MAX);
    Some((gauge * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::animals;

    #[test]
    fn known_guess_scores_against_target() {
        let vocab = animals();
        let keys = CleanedKeyMap::build(vocab.keys());
        let score = score_guess(&vocab, &keys, "voiture", "chat").unwrap();
        assert!(score.abs() < 1e-6);
        let score = score_guess(&vocab, &keys, "chat", "chat").unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn unknown_guess() {
        let vocab = animals();
        let keys = CleanedKeyMap::build(vocab.keys());
        assert!(score_guess(&vocab, &keys, "licorne", "chat").is_none());
        // raw vocabulary keys are not player words
        assert!(score_guess(&vocab, &keys, "chien_NC", "chat").is_none());
    }

    #[test]
    fn gauge_endpoints() {
        assert_eq!(proximity(0.25, 0.8, 0.25), Some(1.0));
        assert_eq!(proximity(0.8, 0.8, 0.25), Some(999.0));
        assert_eq!(proximity(0.525, 0.8, 0.25), Some(500.0));
    }

    #[test]
    fn gauge_absent_outside_band() {
        assert_eq!(proximity(0.1, 0.8, 0.25), None);
        assert_eq!(proximity(0.9, 0.8, 0.25), None);
    }

    #[test]
    fn degenerate_band_is_full_gauge() {
        assert_eq!(proximity(0.25, 0.25, 0.25), Some(999.0));
    }

    #[test]
    fn gauge_stays_in_range() {
        for i in 0..=100 {
            let score = 0.25 + i as f32 * 0.005;
            if let Some(g) = proximity(score, 0.75, 0.25) {
                assert!((PROXIMITY_MIN..=PROXIMITY_MAX).contains(&g), "{g}");
            }
        }
    }
}
