//! API Lambda handler - thin router in front of the summarization pipeline.
//!
//! This module handles:
//! - Health checks (`GET /`, `GET /health`)
//! - CORS preflight (`OPTIONS`)
//! - Summaries (`POST /api/summarize`, delegated to the pipeline)

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing, validation};
use crate::core::config::AppConfig;
use crate::errors::SummaryError;
use crate::pipeline::SummarizationPipeline;
use crate::scoring::{ExtractiveScorer, LocalScorer};

pub use self::function_handler as handler;

const SUMMARIZE_PATHS: [&str; 2] = ["/api/summarize", "/summarize"];

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Fails only when the configuration cannot be loaded; request-level
/// problems are returned as JSON error responses.
#[tracing::instrument(level = "info", skip(event), fields(request_id = tracing::field::Empty))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(SummaryError::ConfigError(e))
    })?;

    let request_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("request_id", request_id.as_str());

    let pipeline = SummarizationPipeline::new(
        LocalScorer::for_language(&config.stopword_language),
        config.pipeline.clone(),
    );

    Ok(route(&config, &pipeline, &event.payload, &request_id).await)
}

/// Routes one API Gateway event to the matching handler.
pub async fn route<S: ExtractiveScorer>(
    config: &AppConfig,
    pipeline: &SummarizationPipeline<S>,
    payload: &Value,
    request_id: &str,
) -> Value {
    let path = parsing::request_path(payload);
    let Some(method) = parsing::request_method(payload) else {
        error!("Request missing HTTP method");
        return helpers::err_response(config, 400, "Missing HTTP method");
    };

    info!(method = %method, raw_path = %path, "API request");
    if let Some(origin) = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "Origin"))
    {
        debug!(origin = %origin, "Request origin");
    }

    if method.eq_ignore_ascii_case("OPTIONS") {
        return helpers::no_content(config);
    }

    let normalized = path.trim_end_matches('/');

    if normalized.is_empty() || normalized.ends_with("/health") {
        return if method.eq_ignore_ascii_case("GET") {
            health(config, request_id)
        } else {
            helpers::err_response(config, 405, "Method Not Allowed")
        };
    }

    if SUMMARIZE_PATHS.iter().any(|p| normalized.ends_with(p)) {
        return if method.eq_ignore_ascii_case("POST") {
            summarize(config, pipeline, payload).await
        } else {
            helpers::err_response(config, 405, "Method Not Allowed")
        };
    }

    warn!(raw_path = %path, "No route for path");
    helpers::err_response(config, 404, "Not Found")
}

fn health(config: &AppConfig, request_id: &str) -> Value {
    helpers::ok_json(
        config,
        &json!({
            "ok": true,
            "service": config.service_name,
            "requestId": request_id,
            "pid": std::process::id(),
            "now": Utc::now().to_rfc3339(),
        }),
    )
}

async fn summarize<S: ExtractiveScorer>(
    config: &AppConfig,
    pipeline: &SummarizationPipeline<S>,
    payload: &Value,
) -> Value {
    let body = match parsing::extract_body(payload, config.max_body_bytes) {
        Ok(body) => body,
        Err(e) => {
            error!(error = ?e, "Failed to read request body");
            return helpers::err_response(config, e.status_code(), &e.message());
        }
    };

    let json_body = match parsing::parse_json_body(&body) {
        Ok(v) => v,
        Err(e) => {
            error!("Request body parse error: {}", e);
            return helpers::err_response(config, 400, "Invalid JSON body");
        }
    };

    let request = match validation::validate_request(config, &json_body) {
        Ok(request) => request,
        Err(SummaryError::ValidationError(message)) => {
            info!(reason = %message, "Rejected summarize request");
            return helpers::err_response(config, 400, &message);
        }
        Err(e) => {
            error!("Unexpected validation failure: {}", e);
            return helpers::err_response(config, 400, &validation::requirements_message(config));
        }
    };

    match pipeline.run(&request).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(body) => helpers::ok_json(config, &body),
            Err(e) => {
                error!("Summarize error: {}", e);
                helpers::err_response(config, 500, helpers::CANONICAL_FAILURE_MESSAGE)
            }
        },
        Err(e) => {
            error!("Summarize error: {}", e);
            helpers::err_response(config, 500, helpers::CANONICAL_FAILURE_MESSAGE)
        }
    }
}
