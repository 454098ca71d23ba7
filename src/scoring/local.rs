//! In-process TextRank and term-frequency scorer

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::pagerank::{PageRank, SentenceGraph};
use super::{ExtractiveScorer, ScorerOutput};
use crate::utils::sentences::{join_sentences, segment};
use crate::utils::stopwords::StopwordFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    ImportanceRank,
    TermFrequency,
}

/// Default [`ExtractiveScorer`] backed by TextRank and word frequencies.
///
/// Scoring is CPU-bound and runs on the blocking thread pool. Importance
/// ranking only considers the first `max_candidates` sentences of a document.
#[derive(Debug, Clone)]
pub struct LocalScorer {
    stopwords: Arc<StopwordFilter>,
    pagerank: PageRank,
    max_candidates: usize,
}

impl Default for LocalScorer {
    fn default() -> Self {
        Self::new(StopwordFilter::default())
    }
}

impl LocalScorer {
    /// Sentences ranked by TextRank before the rest of the document is ignored.
    pub const DEFAULT_MAX_CANDIDATES: usize = 1_000;

    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords: Arc::new(stopwords),
            pagerank: PageRank::default(),
            max_candidates: Self::DEFAULT_MAX_CANDIDATES,
        }
    }

    pub fn for_language(language: &str) -> Self {
        Self::new(StopwordFilter::new(language))
    }

    /// Limits importance ranking to the first `max_candidates` sentences.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates.max(1);
        self
    }

    async fn score(
        &self,
        strategy: Strategy,
        text: &str,
        sentences: usize,
    ) -> anyhow::Result<ScorerOutput> {
        let scorer = self.clone();
        let text = text.to_string();

        let summary =
            tokio::task::spawn_blocking(move || scorer.summarize_blocking(strategy, &text, sentences))
                .await
                .map_err(|e| anyhow::anyhow!("scoring task did not complete: {e}"))?;

        Ok(ScorerOutput { summary })
    }

    fn summarize_blocking(&self, strategy: Strategy, text: &str, count: usize) -> String {
        let sentences = segment(text);
        if sentences.is_empty() || count == 0 {
            return String::new();
        }
        if count >= sentences.len() {
            return join_sentences(&sentences);
        }

        let words: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.stopwords.content_words(s))
            .collect();

        let scores = match strategy {
            Strategy::ImportanceRank => {
                let limit = words.len().min(self.max_candidates);
                self.rank_scores(&words[..limit])
            }
            Strategy::TermFrequency => frequency_scores(&words),
        };

        let selected = top_indices(&scores, count);
        let picked: Vec<&str> = selected.iter().map(|&i| sentences[i].as_str()).collect();

        tracing::debug!(
            ?strategy,
            candidates = sentences.len(),
            selected = ?selected,
            "Scored sentences"
        );

        join_sentences(&picked)
    }

    fn rank_scores(&self, words: &[Vec<String>]) -> Vec<f64> {
        let sets: Vec<HashSet<&str>> = words
            .iter()
            .map(|ws| ws.iter().map(String::as_str).collect())
            .collect();

        // word -> sentences containing it, so only overlapping pairs are visited
        let mut postings: HashMap<&str, Vec<u32>> = HashMap::new();
        for (index, set) in sets.iter().enumerate() {
            for word in set {
                postings.entry(*word).or_default().push(index as u32);
            }
        }

        let adjacency: Vec<Vec<(u32, f64)>> = sets
            .iter()
            .enumerate()
            .map(|(index, set)| {
                let mut shared: HashMap<u32, usize> = HashMap::new();
                for word in set {
                    for &other in &postings[word] {
                        if other as usize != index {
                            *shared.entry(other).or_default() += 1;
                        }
                    }
                }
                shared
                    .into_iter()
                    .map(|(other, count)| {
                        let weight =
                            sentence_similarity(count, set.len(), sets[other as usize].len());
                        (other, weight)
                    })
                    .collect()
            })
            .collect();

        let graph = SentenceGraph::from_adjacency(adjacency);
        self.pagerank.run(&graph)
    }
}

/// TextRank overlap: shared words normalised by the log of both lengths.
fn sentence_similarity(shared: usize, a_len: usize, b_len: usize) -> f64 {
    if shared == 0 {
        return 0.0;
    }

    let shared = shared as f64;
    let norm = (a_len as f64).ln() + (b_len as f64).ln();
    if norm > 0.0 { shared / norm } else { shared }
}

/// Mean document frequency of each sentence's content words.
fn frequency_scores(words: &[Vec<String>]) -> Vec<f64> {
    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for word in words.iter().flatten() {
        *frequencies.entry(word.as_str()).or_default() += 1;
    }

    words
        .iter()
        .map(|ws| {
            if ws.is_empty() {
                return 0.0;
            }
            let total: usize = ws.iter().map(|w| frequencies[w.as_str()]).sum();
            total as f64 / ws.len() as f64
        })
        .collect()
}

/// Indices of the `count` best scores in document order; ties favour earlier sentences.
fn top_indices(scores: &[f64], count: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    ranked.truncate(count);
    ranked.sort_unstable();
    ranked
}

#[async_trait]
impl ExtractiveScorer for LocalScorer {
    async fn score_by_importance_rank(
        &self,
        text: &str,
        sentences: usize,
    ) -> anyhow::Result<ScorerOutput> {
        self.score(Strategy::ImportanceRank, text, sentences).await
    }

    async fn score_by_term_frequency(
        &self,
        text: &str,
        sentences: usize,
    ) -> anyhow::Result<ScorerOutput> {
        self.score(Strategy::TermFrequency, text, sentences).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "El volcán entró en erupción el lunes. \
        La ceniza del volcán cubrió tres pueblos cercanos. \
        Mi vecino compró pan. \
        Las autoridades evacuaron los pueblos cubiertos de ceniza. \
        El gato duerme.";

    #[test]
    fn top_indices_returns_document_order() {
        assert_eq!(top_indices(&[0.1, 0.9, 0.5, 0.7], 2), vec![1, 3]);
        assert_eq!(top_indices(&[0.5, 0.5, 0.5], 2), vec![0, 1]);
    }

    #[test]
    fn similarity_is_zero_without_shared_words() {
        assert_eq!(sentence_similarity(0, 2, 2), 0.0);
    }

    #[test]
    fn single_word_sentences_fall_back_to_raw_overlap() {
        assert_eq!(sentence_similarity(1, 1, 1), 1.0);
    }

    #[test]
    fn similarity_normalises_by_log_lengths() {
        let expected = 2.0 / (3f64.ln() + 4f64.ln());
        assert!((sentence_similarity(2, 3, 4) - expected).abs() < 1e-12);
    }

    #[test]
    fn unrelated_sentences_get_no_edges() {
        let scorer = LocalScorer::default();
        let words = vec![
            vec!["volcán".to_string(), "ceniza".to_string()],
            vec!["gato".to_string()],
            vec!["ceniza".to_string(), "pueblo".to_string()],
        ];
        let scores = scorer.rank_scores(&words);
        assert_eq!(scores.len(), 3);
        assert!(scores[0] > scores[1]);
        assert!((scores[0] - scores[2]).abs() < 1e-9);
    }

    #[test]
    fn frequency_prefers_sentences_with_repeated_words() {
        let words = vec![
            vec!["ceniza".to_string(), "volcán".to_string()],
            vec!["pan".to_string()],
            vec!["ceniza".to_string()],
        ];
        let scores = frequency_scores(&words);
        assert!(scores[0] > scores[1]);
        assert!(scores[2] > scores[1]);
    }

    #[tokio::test]
    async fn rank_picks_central_sentences_in_document_order() {
        let scorer = LocalScorer::default();
        let out = scorer.score_by_importance_rank(DOC, 2).await.unwrap();
        let picked = segment(&out.summary);

        assert_eq!(picked.len(), 2);
        assert!(!out.summary.contains("gato"));
        assert!(!out.summary.contains("pan"));
        assert!(out.summary.find("ceniza del volcán") < out.summary.find("evacuaron"));
    }

    #[tokio::test]
    async fn frequency_returns_requested_count() {
        let scorer = LocalScorer::default();
        let out = scorer.score_by_term_frequency(DOC, 3).await.unwrap();
        assert_eq!(segment(&out.summary).len(), 3);
        assert!(!out.summary.contains("gato"));
    }

    #[tokio::test]
    async fn asking_for_more_sentences_than_exist_returns_everything() {
        let scorer = LocalScorer::default();
        let out = scorer.score_by_term_frequency("Uno dos. Tres cuatro.", 5).await.unwrap();
        assert_eq!(out.summary, "Uno dos. Tres cuatro.");
    }

    #[tokio::test]
    async fn empty_text_gives_empty_summary() {
        let scorer = LocalScorer::default();
        let out = scorer.score_by_importance_rank("   ", 3).await.unwrap();
        assert!(out.summary.is_empty());
    }

    #[tokio::test]
    async fn rank_ignores_sentences_past_the_candidate_limit() {
        let scorer = LocalScorer::default().with_max_candidates(2);
        let out = scorer.score_by_importance_rank(DOC, 1).await.unwrap();
        let picked = segment(&out.summary);

        assert_eq!(picked.len(), 1);
        assert!(segment(DOC)[..2].contains(&picked[0]));
    }

    #[tokio::test]
    async fn rank_handles_documents_with_many_short_sentences() {
        let topics = ["Río", "Selva", "Caudal", "Lluvia", "Montaña"];
        let text: Vec<String> = (0..20_000)
            .map(|i| format!("{} crece.", topics[i % topics.len()]))
            .collect();
        let text = text.join(" ");

        let scorer = LocalScorer::default();
        let out = scorer.score_by_importance_rank(&text, 3).await.unwrap();
        assert_eq!(segment(&out.summary).len(), 3);
    }
}
