//! Response builders for the API Gateway proxy format.
//!
//! Every response carries a JSON content type and the CORS headers the
//! browser client needs.

use serde_json::{Value, json};

use crate::core::config::AppConfig;

/// Canonical failure message returned when the pipeline fails.
pub const CANONICAL_FAILURE_MESSAGE: &str = "Could not generate the summary.";

fn headers(config: &AppConfig) -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": config.allowed_origin,
        "Access-Control-Allow-Methods": "GET, POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type",
    })
}

/// Returns a response with the given status code and JSON body.
#[must_use]
pub fn json_response(config: &AppConfig, status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": headers(config),
        "body": body.to_string()
    })
}

/// Returns a 200 OK response with the given JSON body.
#[must_use]
pub fn ok_json(config: &AppConfig, body: &Value) -> Value {
    json_response(config, 200, body)
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(config: &AppConfig, status_code: u16, message: &str) -> Value {
    json_response(config, status_code, &json!({ "error": message }))
}

/// Returns a 204 response for CORS preflight requests.
#[must_use]
pub fn no_content(config: &AppConfig) -> Value {
    json!({
        "statusCode": 204,
        "headers": headers(config),
        "body": ""
    })
}
