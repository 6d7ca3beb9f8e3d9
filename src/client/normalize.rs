//! Success-path normalization.
//!
//! The backend's `response` field shape-shifts: sometimes a plain string,
//! sometimes a nested object whose primary message hides under `message` or
//! `final_answer`. Everything collapses into [`Reply`] here so no consumer
//! is ever handed a raw object.

use serde_json::Value;

/// Default `source` when the backend does not name one.
const DEFAULT_SOURCE: &str = "assistant";

/// The canonical success value: plain text plus the answering source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: String,
}

/// Convert a validated success payload into a [`Reply`].
///
/// Only called once classification has confirmed a 2xx status, valid JSON,
/// and a non-empty `response` field.
///
/// Extraction precedence for an object-shaped `response`: `message`, then
/// `final_answer`, then the full JSON serialization of the object. The
/// serialization fallback is deliberate: no information is silently dropped
/// even when the backend invents a new shape.
pub fn normalize(payload: &Value) -> Reply {
    let response = payload.get("response").unwrap_or(&Value::Null);

    let text = match response {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .or_else(|| {
                map.get("final_answer")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
            })
            .map(str::to_string)
            .unwrap_or_else(|| response.to_string()),
        other => other.to_string(),
    };

    let source = payload
        .get("source")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SOURCE)
        .to_string();

    Reply { text, source }
}
