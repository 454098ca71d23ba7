/// Resum-IA - an extractive summarizer for short passages of Spanish text.
///
/// This crate implements the summarization API as an AWS Lambda function:
/// 1. An HTTP boundary that validates `{ text, sentences? }` requests
/// 2. A pipeline that segments the text, bounds the summary size, asks an
///    extractive scorer for candidates and falls back when they are unusable
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (API Gateway / function URL events) for serverless execution
/// - A regex-based sentence segmenter tuned to Spanish punctuation
/// - TextRank and term-frequency scoring behind the `ExtractiveScorer` trait
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use resumia::core::config::PipelineConfig;
/// use resumia::core::models::SummaryRequest;
/// use resumia::pipeline::SummarizationPipeline;
/// use resumia::scoring::LocalScorer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     resumia::setup_logging();
///
///     let pipeline = SummarizationPipeline::new(LocalScorer::default(), PipelineConfig::default());
///     let request = SummaryRequest::new(
///         "El río creció durante la noche. Los vecinos subieron sus muebles. \
///          Por la mañana el agua ya había bajado. Nadie resultó herido.",
///         Some(2),
///     );
///
///     let result = pipeline.run(&request).await?;
///     println!("{} ({} chars)", result.summary, result.meta.summary_chars);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod scoring;
pub mod utils;

pub use errors::SummaryError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration and honours `RUST_LOG`. It should be called
/// once at the start of the Lambda process; repeated calls are ignored.
///
/// # Example
///
/// ```
/// resumia::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
