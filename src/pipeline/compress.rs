use crate::core::models::char_len;
use crate::utils::sentences::{join_sentences, segment};

/// `ceil(original_chars * max_char_ratio)`.
#[must_use]
pub fn target_chars(original_chars: usize, max_char_ratio: f64) -> usize {
    (original_chars as f64 * max_char_ratio).ceil() as usize
}

/// Drops trailing sentences until `summary` fits in `target` chars.
///
/// A single remaining sentence is returned as is, even when it is still too
/// long; sentences are never cut in the middle.
#[must_use]
pub fn compress(summary: String, target: usize) -> String {
    if char_len(&summary) <= target {
        return summary;
    }

    let mut sentences = segment(&summary);
    let mut compressed = summary;
    while char_len(&compressed) > target && sentences.len() > 1 {
        sentences.pop();
        compressed = join_sentences(&sentences);
    }
    compressed
}
