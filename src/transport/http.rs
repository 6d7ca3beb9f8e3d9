use crate::error::BuildError;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::{Duration, Instant};
use url::Url;

/// The only outbound payload: `{"message": "<user text>"}`.
///
/// Non-emptiness of `message` is the caller's concern, not the transport's.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The as-received result of one attempt. Ephemeral: it exists only between
/// dispatch and classification and is never shared across attempts.
#[derive(Debug)]
pub enum RawOutcome {
    /// A server answered, with whatever status and body it produced.
    Response { status: StatusCode, body: String },
    /// The local deadline fired before any response arrived; the in-flight
    /// request was cancelled.
    TimedOut,
    /// The request never reached a server (DNS, connect, reset).
    ConnectionFailed { detail: String },
}

/// Issues one POST per attempt against a fixed endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    /// `endpoint` is the full chat URL (e.g. `http://host:8000/api/chat`).
    ///
    /// No client-level timeout is set: the deadline is enforced per attempt
    /// in [`send`](Self::send) so each retry starts a fresh timer.
    pub fn new(endpoint: &str) -> Result<Self, BuildError> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, endpoint })
    }

    /// Perform one attempt under `deadline`.
    ///
    /// The request future is wrapped in `tokio::time::timeout`; when the
    /// timer fires the future is dropped, which aborts the in-flight
    /// connection. The timer itself cannot outlive the attempt, so nothing
    /// leaks across retries.
    pub async fn send(&self, request: &ChatRequest, deadline: Duration) -> RawOutcome {
        let started = Instant::now();

        let dispatch = async {
            let response = self
                .client
                .post(self.endpoint.clone())
                .json(request)
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let outcome = match tokio::time::timeout(deadline, dispatch).await {
            Err(_elapsed) => RawOutcome::TimedOut,
            Ok(Ok((status, body))) => RawOutcome::Response { status, body },
            Ok(Err(e)) => RawOutcome::ConnectionFailed {
                detail: e.to_string(),
            },
        };

        // Operational timing only; message content is never logged here.
        match &outcome {
            RawOutcome::Response { status, .. } => {
                tracing::debug!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    status = status.as_u16(),
                    "attempt completed"
                );
            }
            RawOutcome::TimedOut => {
                tracing::debug!(
                    deadline_ms = deadline.as_millis() as u64,
                    "attempt cancelled at deadline"
                );
            }
            RawOutcome::ConnectionFailed { detail } => {
                tracing::debug!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    %detail,
                    "attempt failed before a response"
                );
            }
        }

        outcome
    }
}
