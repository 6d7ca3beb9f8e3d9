//! Failure classification for one attempt.

use crate::error::{ClassifiedError, ErrorKind};
use crate::transport::RawOutcome;
use serde_json::Value;

/// Inspect one attempt's [`RawOutcome`] and either hand back the parsed
/// success payload or assign the failure exactly one [`ErrorKind`].
///
/// Precedence: status-derived kinds win over body-derived kinds. A 504 is a
/// `GatewayTimeout` and any other non-2xx is an `HttpError` no matter what
/// the body contains; only a 2xx gets its body inspected.
pub fn classify(outcome: RawOutcome) -> Result<Value, ClassifiedError> {
    match outcome {
        RawOutcome::TimedOut => Err(ClassifiedError::new(ErrorKind::ClientTimeout)),

        RawOutcome::ConnectionFailed { detail } => Err(ClassifiedError::with_detail(
            ErrorKind::NetworkFailure,
            detail,
        )),

        RawOutcome::Response { status, body } => {
            if status.as_u16() == 504 {
                return Err(ClassifiedError::new(ErrorKind::GatewayTimeout));
            }

            if !status.is_success() {
                return Err(match extract_error_detail(&body) {
                    Some(detail) => ClassifiedError::with_detail(ErrorKind::HttpError, detail),
                    None => ClassifiedError::with_detail(
                        ErrorKind::HttpError,
                        format!("Request failed with status {}", status.as_u16()),
                    ),
                });
            }

            let payload: Value = serde_json::from_str(&body)
                .map_err(|_| ClassifiedError::new(ErrorKind::MalformedBody))?;

            if is_empty_response(payload.get("response")) {
                return Err(ClassifiedError::with_detail(
                    ErrorKind::EmptyResponse,
                    "Empty response from server",
                ));
            }

            Ok(payload)
        }
    }
}

/// Best-effort extraction of a displayable message from an error body:
/// a JSON `error` or `message` string, else the raw body text.
fn extract_error_detail(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = parsed.get(key).and_then(Value::as_str) {
                if !text.trim().is_empty() {
                    return Some(text.to_string());
                }
            }
        }
        return None;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A `response` field is usable only when present, non-null, and non-empty.
/// An empty object would normalize to `"{}"`, which is never a useful reply.
fn is_empty_response(response: Option<&Value>) -> bool {
    match response {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}
