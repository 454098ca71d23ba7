use serde::{Deserialize, Serialize};

/// A single summarization request, consumed once by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub text: String,
    /// Requested sentence count before clamping; `None` means "use the default".
    pub sentences: Option<i64>,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>, sentences: Option<i64>) -> Self {
        Self {
            text: text.into(),
            sentences,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMeta {
    pub requested_sentences: usize,
    pub used_sentences: usize,
    pub original_sentences: usize,
    /// `summary_chars / original_chars`, rounded to two decimals.
    pub compression_ratio: f64,
    pub original_chars: usize,
    pub summary_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub meta: SummaryMeta,
}

/// Length in characters, the unit every size bound of the pipeline uses.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[must_use]
pub fn round_ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let ratio = numerator as f64 / denominator as f64;
    (ratio * 100.0).round() / 100.0
}
