use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Invalid summarize request: {0}")]
    ValidationError(String),

    #[error("Failed to score sentences: {0}")]
    ScorerError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse request: {0}")]
    ParseError(String),
}

impl From<anyhow::Error> for SummaryError {
    fn from(error: anyhow::Error) -> Self {
        SummaryError::ScorerError(format!("{error:#}"))
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::ParseError(error.to_string())
    }
}
