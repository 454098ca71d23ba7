use std::env;
use std::str::FromStr;

/// Tunable constants of the summarization pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Candidates shorter than this (in chars, after trimming) are unusable.
    pub usability_threshold: usize,
    /// The summary may use at most this share of the original sentences.
    pub max_sentence_ratio: f64,
    /// Summaries longer than this share of the original chars are compressed.
    pub max_char_ratio: f64,
    /// Sentence count used when the request does not carry a usable one.
    pub default_sentences: usize,
    /// Upper clamp for the requested sentence count.
    pub max_sentences: usize,
}

impl PipelineConfig {
    /// Lower clamp for the requested sentence count.
    pub const MIN_SENTENCES: usize = 1;
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            usability_threshold: 20,
            max_sentence_ratio: 0.5,
            max_char_ratio: 0.6,
            default_sentences: 3,
            max_sentences: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub min_text_chars: usize,
    pub max_body_bytes: usize,
    pub allowed_origin: String,
    pub service_name: String,
    pub stopword_language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            min_text_chars: 50,
            max_body_bytes: 2 * 1024 * 1024,
            allowed_origin: "*".to_string(),
            service_name: "resum-ia-api".to_string(),
            stopword_language: "es".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, which returns the raw value of
    /// a variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let pipeline_defaults = defaults.pipeline;

        let pipeline = PipelineConfig {
            usability_threshold: parse_var(
                &lookup,
                "RESUMIA_USABILITY_THRESHOLD",
                pipeline_defaults.usability_threshold,
            )?,
            max_sentence_ratio: parse_ratio(
                &lookup,
                "RESUMIA_MAX_SENTENCE_RATIO",
                pipeline_defaults.max_sentence_ratio,
            )?,
            max_char_ratio: parse_ratio(
                &lookup,
                "RESUMIA_MAX_CHAR_RATIO",
                pipeline_defaults.max_char_ratio,
            )?,
            default_sentences: parse_var(
                &lookup,
                "RESUMIA_DEFAULT_SENTENCES",
                pipeline_defaults.default_sentences,
            )?,
            max_sentences: parse_var(
                &lookup,
                "RESUMIA_MAX_SENTENCES",
                pipeline_defaults.max_sentences,
            )?,
        };

        if pipeline.max_sentences < PipelineConfig::MIN_SENTENCES {
            return Err("RESUMIA_MAX_SENTENCES: must be at least 1".to_string());
        }

        Ok(Self {
            pipeline,
            min_text_chars: parse_var(&lookup, "RESUMIA_MIN_TEXT_CHARS", defaults.min_text_chars)?,
            max_body_bytes: parse_var(&lookup, "RESUMIA_MAX_BODY_BYTES", defaults.max_body_bytes)?,
            allowed_origin: lookup("RESUMIA_ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
            service_name: lookup("RESUMIA_SERVICE_NAME").unwrap_or(defaults.service_name),
            stopword_language: lookup("RESUMIA_STOPWORD_LANGUAGE")
                .unwrap_or(defaults.stopword_language),
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| format!("{}: {}", name, e)),
        None => Ok(default),
    }
}

fn parse_ratio<F>(lookup: &F, name: &str, default: f64) -> Result<f64, String>
where
    F: Fn(&str) -> Option<String>,
{
    let ratio = parse_var(lookup, name, default)?;
    if ratio > 0.0 && ratio <= 1.0 {
        Ok(ratio)
    } else {
        Err(format!("{}: ratio must be in (0, 1], got {}", name, ratio))
    }
}
