//! Summarization pipeline
//!
//! Segments the document, bounds the summary size, escalates through the
//! scorer tiers until a candidate is usable and finally compresses it.

pub mod bounds;
pub mod compress;

use tracing::{debug, error, info, warn};

use crate::core::config::PipelineConfig;
use crate::core::models::{SummaryMeta, SummaryRequest, SummaryResult, char_len, round_ratio};
use crate::errors::SummaryError;
use crate::scoring::ExtractiveScorer;
use crate::utils::sentences::{join_sentences, segment, strip_citations};

use self::bounds::SentenceBounds;
use self::compress::{compress, target_chars};

/// Which tier produced the candidate summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    ImportanceRank,
    TermFrequency,
    LeadSentences,
}

/// Output of the fallback and compression stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageOutput {
    pub summary: String,
    pub used_sentences: usize,
    pub tier: Tier,
}

#[derive(Debug, Clone)]
pub struct SummarizationPipeline<S: ExtractiveScorer> {
    scorer: S,
    config: PipelineConfig,
}

impl<S: ExtractiveScorer> SummarizationPipeline<S> {
    pub fn new(scorer: S, config: PipelineConfig) -> Self {
        Self { scorer, config }
    }

    /// Runs one request end to end.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::ScorerError`] when a scorer call fails; no
    /// partial summary is produced in that case.
    #[tracing::instrument(level = "info", skip_all, fields(requested = ?request.sentences))]
    pub async fn run(&self, request: &SummaryRequest) -> Result<SummaryResult, SummaryError> {
        let text = request.text.as_str();
        let original_sentences = segment(text).len().max(1);
        let bounds = SentenceBounds::compute(&self.config, request.sentences, original_sentences);

        debug!(
            original_sentences,
            requested = bounds.requested,
            max_allowed = bounds.max_allowed,
            effective = bounds.effective,
            "Computed sentence bounds"
        );

        let output = self.summarize(text, bounds.effective).await?;

        let original_chars = char_len(text);
        let summary_chars = char_len(&output.summary);
        info!(
            tier = ?output.tier,
            original_chars,
            summary_chars,
            used_sentences = output.used_sentences,
            "Summary generated"
        );

        Ok(SummaryResult {
            meta: SummaryMeta {
                requested_sentences: bounds.requested,
                used_sentences: output.used_sentences,
                original_sentences,
                compression_ratio: round_ratio(summary_chars, original_chars),
                original_chars,
                summary_chars,
            },
            summary: output.summary,
        })
    }

    /// Produces a non-empty candidate for `document` and compresses it to
    /// the configured share of the document length.
    ///
    /// Tiers run in order and stop at the first candidate that reaches the
    /// usability threshold: importance rank, term frequency, then the first
    /// `effective` sentences of the document.
    ///
    /// # Errors
    ///
    /// Scorer failures propagate unchanged as [`SummaryError::ScorerError`].
    pub async fn summarize(
        &self,
        document: &str,
        effective: usize,
    ) -> Result<StageOutput, SummaryError> {
        let cleaned = strip_citations(document);
        let cleaned = cleaned.trim();

        let (candidate, tier) = self.select_candidate(cleaned, effective).await?;

        let target = target_chars(char_len(document), self.config.max_char_ratio);
        let summary = compress(candidate, target);

        Ok(StageOutput {
            summary,
            used_sentences: effective,
            tier,
        })
    }

    async fn select_candidate(
        &self,
        cleaned: &str,
        effective: usize,
    ) -> Result<(String, Tier), SummaryError> {
        let ranked = self
            .scorer
            .score_by_importance_rank(cleaned, effective)
            .await
            .inspect_err(|e| error!(error = ?e, "Importance rank scorer failed"))?;
        let ranked = ranked.summary.trim();
        if self.is_usable(ranked) {
            return Ok((ranked.to_string(), Tier::ImportanceRank));
        }
        warn!(chars = char_len(ranked), "Rank summary unusable, trying term frequency");

        let frequent = self
            .scorer
            .score_by_term_frequency(cleaned, effective)
            .await
            .inspect_err(|e| error!(error = ?e, "Term frequency scorer failed"))?;
        let frequent = frequent.summary.trim();
        if self.is_usable(frequent) {
            return Ok((frequent.to_string(), Tier::TermFrequency));
        }
        warn!(chars = char_len(frequent), "Frequency summary unusable, using lead sentences");

        let lead: Vec<String> = segment(cleaned).into_iter().take(effective).collect();
        Ok((join_sentences(&lead), Tier::LeadSentences))
    }

    fn is_usable(&self, candidate: &str) -> bool {
        char_len(candidate) >= self.config.usability_threshold
    }
}
