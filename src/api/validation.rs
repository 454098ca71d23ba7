use serde_json::Value;

use super::parsing::parse_requested_sentences;
use crate::SummaryError;
use crate::core::config::{AppConfig, PipelineConfig};
use crate::core::models::{SummaryRequest, char_len};

/// The message returned for every rejected request, naming both constraints.
#[must_use]
pub fn requirements_message(config: &AppConfig) -> String {
    format!(
        "Send 'text' (>= {} characters). Optional: 'sentences' ({}..{}).",
        config.min_text_chars,
        PipelineConfig::MIN_SENTENCES,
        config.pipeline.max_sentences
    )
}

/// Builds a [`SummaryRequest`] from the decoded JSON body.
///
/// `text` must be a string of at least `min_text_chars` characters once
/// trimmed. `sentences` is optional and never rejected; unusable values fall
/// back to the default later on.
pub fn validate_request(config: &AppConfig, body: &Value) -> Result<SummaryRequest, SummaryError> {
    let Some(text) = body.get("text").and_then(Value::as_str) else {
        return Err(SummaryError::ValidationError(requirements_message(config)));
    };

    if char_len(text.trim()) < config.min_text_chars {
        return Err(SummaryError::ValidationError(requirements_message(config)));
    }

    let sentences = body.get("sentences").and_then(parse_requested_sentences);

    Ok(SummaryRequest::new(text, sentences))
}
