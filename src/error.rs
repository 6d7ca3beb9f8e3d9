use thiserror::Error;

/// Closed classification of everything that can go wrong with one attempt.
///
/// Status-derived kinds ([`GatewayTimeout`](ErrorKind::GatewayTimeout),
/// [`HttpError`](ErrorKind::HttpError)) take precedence over body-derived
/// kinds: an erroring status is definitive while body content is secondary
/// evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// HTTP 504 from the gateway in front of the backend.
    GatewayTimeout,
    /// The local deadline fired before any response arrived.
    ClientTimeout,
    /// Any other non-2xx status.
    HttpError,
    /// 2xx status but the body is not valid JSON.
    MalformedBody,
    /// The request never reached a server (DNS, connect, reset).
    NetworkFailure,
    /// 2xx status with valid JSON but no usable `response` field.
    EmptyResponse,
}

impl ErrorKind {
    /// Transient latency/availability kinds eligible for retry.
    ///
    /// Content and validation errors will fail the same way on every
    /// attempt, so only the two timeout kinds qualify.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorKind::GatewayTimeout | ErrorKind::ClientTimeout)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorKind::GatewayTimeout => "gateway_timeout",
            ErrorKind::ClientTimeout => "client_timeout",
            ErrorKind::HttpError => "http_error",
            ErrorKind::MalformedBody => "malformed_body",
            ErrorKind::NetworkFailure => "network_failure",
            ErrorKind::EmptyResponse => "empty_response",
        };
        f.write_str(label)
    }
}

/// One attempt's failure: its [`ErrorKind`] plus any server-supplied detail
/// (an `error` or `message` field extracted from the error body).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}", format_detail(.detail))]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub detail: Option<String>,
}

// Helper to render the optional server detail after the kind label.
fn format_detail(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {d}"),
        None => String::new(),
    }
}

impl ClassifiedError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, detail: None }
    }

    pub fn with_detail(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: Some(detail.into()),
        }
    }
}

/// Visual marker prefixed to every user-visible error string, so the UI can
/// render failures without re-interpreting error structure.
const WARNING_PREFIX: &str = "\u{26a0}\u{fe0f} ";

/// The failure half of the canonical result returned to the UI.
///
/// `display_text` is always human-readable and already carries the warning
/// marker; the UI displays it verbatim and never branches on error kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{display_text}")]
pub struct ChatFailure {
    pub display_text: String,
}

impl ChatFailure {
    /// Format a terminal classified error for display.
    ///
    /// The two transient kinds only reach this point once the retry budget
    /// is exhausted, so their wording speaks to repeated unresponsiveness.
    pub fn from_classified(err: &ClassifiedError) -> Self {
        let body = match err.kind {
            ErrorKind::ClientTimeout => {
                "The request timed out. The server might be busy. Please try again later."
                    .to_string()
            }
            ErrorKind::GatewayTimeout => {
                "The request took too long. Please try again with a more specific query."
                    .to_string()
            }
            ErrorKind::NetworkFailure => {
                "Network error - please check your connection.".to_string()
            }
            _ => match &err.detail {
                Some(detail) if !detail.trim().is_empty() => detail.clone(),
                _ => "Service unavailable. Please try again.".to_string(),
            },
        };
        Self {
            display_text: format!("{WARNING_PREFIX}{body}"),
        }
    }
}

/// Errors raised while constructing a [`ChatClient`](crate::ChatClient).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("failed to construct HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
