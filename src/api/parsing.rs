use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::SummaryError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method of an API Gateway v2 (function URL) or v1 (REST) event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

/// Request path of the event, `/` when absent.
pub fn request_path(payload: &Value) -> &str {
    v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .unwrap_or("/")
}

/// Returns the decoded request body, rejecting bodies over `max_bytes`.
///
/// An absent or `null` body reads as empty.
pub fn extract_body(payload: &Value, max_bytes: usize) -> Result<String, BodyError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => return Ok(String::new()),
        Some(body) => body,
    };
    let Some(raw) = body.as_str() else {
        return Err(BodyError::Invalid("Invalid body format".to_string()));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let decoded = if is_base64 {
        let bytes = STANDARD
            .decode(raw)
            .map_err(|e| BodyError::Invalid(format!("Invalid base64 body: {e}")))?;
        if bytes.len() > max_bytes {
            return Err(BodyError::TooLarge);
        }
        String::from_utf8(bytes)
            .map_err(|e| BodyError::Invalid(format!("Body is not valid UTF-8: {e}")))?
    } else {
        if raw.len() > max_bytes {
            return Err(BodyError::TooLarge);
        }
        raw.to_string()
    };

    Ok(decoded)
}

/// Why a request body could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyError {
    TooLarge,
    Invalid(String),
}

impl BodyError {
    pub fn status_code(&self) -> u16 {
        match self {
            BodyError::TooLarge => 413,
            BodyError::Invalid(_) => 400,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BodyError::TooLarge => "Request body too large".to_string(),
            BodyError::Invalid(msg) => msg.clone(),
        }
    }
}

pub fn parse_json_body(body: &str) -> Result<Value, SummaryError> {
    if body.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(body)?)
}

/// Reads the optional `sentences` field.
///
/// Numbers and numeric strings are floored; anything else counts as absent.
pub fn parse_requested_sentences(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if number.is_finite() {
        Some(number.floor() as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_and_path_from_function_url_event() {
        let payload = json!({
            "rawPath": "/api/summarize",
            "requestContext": { "http": { "method": "POST" } }
        });
        assert_eq!(request_method(&payload), Some("POST"));
        assert_eq!(request_path(&payload), "/api/summarize");
    }

    #[test]
    fn method_and_path_from_rest_event() {
        let payload = json!({ "path": "/summarize", "httpMethod": "GET" });
        assert_eq!(request_method(&payload), Some("GET"));
        assert_eq!(request_path(&payload), "/summarize");
        assert_eq!(request_path(&json!({})), "/");
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let headers = json!({ "content-type": "application/json" });
        assert_eq!(
            get_header_value(&headers, "Content-Type"),
            Some("application/json")
        );
        assert_eq!(get_header_value(&headers, "Origin"), None);
    }

    #[test]
    fn base64_body_is_decoded() {
        let payload = json!({ "body": "eyJ0ZXh0IjoiaG9sYSJ9", "isBase64Encoded": true });
        assert_eq!(extract_body(&payload, 1024).unwrap(), r#"{"text":"hola"}"#);
    }

    #[test]
    fn oversized_bodies_are_rejected() {
        let payload = json!({ "body": "x".repeat(11) });
        assert_eq!(extract_body(&payload, 10), Err(BodyError::TooLarge));
        assert_eq!(BodyError::TooLarge.status_code(), 413);
        assert_eq!(extract_body(&json!({ "body": 7 }), 10).unwrap_err().status_code(), 400);
    }

    #[test]
    fn absent_body_reads_as_empty_object() {
        assert_eq!(extract_body(&json!({}), 10).unwrap(), "");
        assert_eq!(extract_body(&json!({ "body": null }), 10).unwrap(), "");
        assert_eq!(parse_json_body("").unwrap(), json!({}));
    }

    #[test]
    fn requested_sentences_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_requested_sentences(&json!(4)), Some(4));
        assert_eq!(parse_requested_sentences(&json!(2.9)), Some(2));
        assert_eq!(parse_requested_sentences(&json!(" 7 ")), Some(7));
        assert_eq!(parse_requested_sentences(&json!(-3)), Some(-3));
        assert_eq!(parse_requested_sentences(&json!("muchas")), None);
        assert_eq!(parse_requested_sentences(&json!(true)), None);
        assert_eq!(parse_requested_sentences(&Value::Null), None);
    }

    #[test]
    fn empty_body_parses_as_empty_object() {
        assert_eq!(parse_json_body("  ").unwrap(), json!({}));
        assert!(parse_json_body("{not json").is_err());
    }
}
