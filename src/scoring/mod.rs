//! Extractive scoring capability
//!
//! The pipeline treats scoring as a black box with two strategies. Any type
//! implementing [`ExtractiveScorer`] can be plugged in; [`LocalScorer`] is the
//! in-process default.

pub mod local;
pub mod pagerank;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use local::LocalScorer;

/// Candidate summary returned by a scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorerOutput {
    #[serde(default)]
    pub summary: String,
}

impl ScorerOutput {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}

/// Produces candidate summaries of `text` with about `sentences` sentences.
///
/// No minimum quality is promised; callers must be ready for empty or very
/// short output.
#[async_trait]
pub trait ExtractiveScorer: Send + Sync {
    /// Selects sentences by graph centrality.
    async fn score_by_importance_rank(
        &self,
        text: &str,
        sentences: usize,
    ) -> anyhow::Result<ScorerOutput>;

    /// Selects sentences by the frequency of their content words.
    async fn score_by_term_frequency(
        &self,
        text: &str,
        sentences: usize,
    ) -> anyhow::Result<ScorerOutput>;
}
