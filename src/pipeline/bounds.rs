use crate::core::config::PipelineConfig;

/// Sentence-count bounds applied to one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceBounds {
    /// The request after defaulting and clamping.
    pub requested: usize,
    /// The ceiling derived from the original sentence count.
    pub max_allowed: usize,
    /// `min(requested, max_allowed)`, never zero.
    pub effective: usize,
}

impl SentenceBounds {
    pub fn compute(
        config: &PipelineConfig,
        requested: Option<i64>,
        original_sentences: usize,
    ) -> Self {
        let requested = clamp_requested(config, requested);
        let max_allowed = max_allowed(config, original_sentences);
        Self {
            requested,
            max_allowed,
            effective: requested.min(max_allowed),
        }
    }
}

/// Defaults an absent request, then clamps it into `[1, max_sentences]`.
#[must_use]
pub fn clamp_requested(config: &PipelineConfig, requested: Option<i64>) -> usize {
    let min = PipelineConfig::MIN_SENTENCES as i64;
    let max = config.max_sentences.max(PipelineConfig::MIN_SENTENCES) as i64;
    let value = requested.unwrap_or(config.default_sentences as i64);
    value.clamp(min, max) as usize
}

/// `max(1, floor(original * max_sentence_ratio))`.
#[must_use]
pub fn max_allowed(config: &PipelineConfig, original_sentences: usize) -> usize {
    let ceiling = (original_sentences as f64 * config.max_sentence_ratio).floor() as usize;
    ceiling.max(PipelineConfig::MIN_SENTENCES)
}

/// Effective sentence count under the default configuration.
///
/// ```
/// use resumia::pipeline::bounds::compute_effective_count;
///
/// assert_eq!(compute_effective_count(3, 10), 3);
/// assert_eq!(compute_effective_count(3, 2), 1);
/// assert_eq!(compute_effective_count(50, 100), 10);
/// ```
#[must_use]
pub fn compute_effective_count(requested: i64, original_sentences: usize) -> usize {
    SentenceBounds::compute(&PipelineConfig::default(), Some(requested), original_sentences)
        .effective
}
