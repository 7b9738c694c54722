use rand::seq::IndexedRandom;
use rand::Rng;

use crate::assets::word_list::WordList;
use crate::core::keys::CleanedKeyMap;

/// Pick a target uniformly among list entries the vocabulary covers.
///
/// Returns `None` when the list is empty or no entry is covered.
/// Duplicate entries weigh proportionally.
pub fn select_target<R: Rng + ?Sized>(
    words: &WordList,
    keys: &CleanedKeyMap,
    rng: &mut R,
) -> Option<String> {
    let covered: Vec<&str> = words.iter().filter(|word| keys.contains(word)).collect();
    if covered.len() < words.len() {
        log::debug!(
            "{} of {} list words missing from the vocabulary",
            words.len() - covered.len(),
            words.len()
        );
    }
    covered.choose(rng).map(|word| (*word).to_owned())
}
