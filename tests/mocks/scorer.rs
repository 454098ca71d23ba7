use async_trait::async_trait;
use resumia::scoring::{ExtractiveScorer, ScorerOutput};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Rank,
    Frequency,
}

#[derive(Debug, Clone)]
pub enum Reply {
    Summary(String),
    Fail(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub strategy: Strategy,
    pub text: String,
    pub sentences: usize,
}

#[derive(Clone)]
pub struct MockScorer {
    pub rank: Reply,
    pub frequency: Reply,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl MockScorer {
    pub fn new(rank: &str, frequency: &str) -> Self {
        Self {
            rank: Reply::Summary(rank.to_string()),
            frequency: Reply::Summary(frequency.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_rank(msg: &str) -> Self {
        Self {
            rank: Reply::Fail(msg.to_string()),
            ..Self::new("", "")
        }
    }

    pub fn failing_frequency(rank: &str, msg: &str) -> Self {
        Self {
            frequency: Reply::Fail(msg.to_string()),
            ..Self::new(rank, "")
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn strategies(&self) -> Vec<Strategy> {
        self.calls().into_iter().map(|c| c.strategy).collect()
    }

    fn reply(&self, strategy: Strategy, text: &str, sentences: usize) -> anyhow::Result<ScorerOutput> {
        self.calls.lock().unwrap().push(Call {
            strategy,
            text: text.to_string(),
            sentences,
        });

        let reply = match strategy {
            Strategy::Rank => &self.rank,
            Strategy::Frequency => &self.frequency,
        };
        match reply {
            Reply::Summary(summary) => Ok(ScorerOutput::new(summary.clone())),
            Reply::Fail(msg) => Err(anyhow::anyhow!("{}", msg)),
        }
    }
}

#[async_trait]
impl ExtractiveScorer for MockScorer {
    async fn score_by_importance_rank(
        &self,
        text: &str,
        sentences: usize,
    ) -> anyhow::Result<ScorerOutput> {
        self.reply(Strategy::Rank, text, sentences)
    }

    async fn score_by_term_frequency(
        &self,
        text: &str,
        sentences: usize,
    ) -> anyhow::Result<ScorerOutput> {
        self.reply(Strategy::Frequency, text, sentences)
    }
}
