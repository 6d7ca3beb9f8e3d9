use crate::client::classification::classify;
use crate::client::normalize::normalize;
use crate::client::policy::{Decision, RetryPolicy};
use crate::error::{ChatFailure, ClassifiedError};
use crate::transport::{ChatRequest, HttpTransport};
use crate::ChatResult;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Chat client: orchestrates transport, classification, retry policy, and
/// normalization behind a single `send_message` entry point.
///
/// The client holds only configuration; every `send_message` call owns its
/// own attempt state, so concurrent calls are fully independent.
pub struct ChatClient {
    pub(crate) transport: HttpTransport,
    pub(crate) deadline: Duration,
    pub(crate) policy: RetryPolicy,
}

/// Per-call retry bookkeeping. Mutated only by the attempt loop below and
/// never shared across calls.
struct AttemptState {
    attempts_remaining: u32,
    last_error: Option<ClassifiedError>,
}

impl ChatClient {
    /// Create a client with default configuration for `endpoint`.
    pub fn new(endpoint: &str) -> Result<Self, crate::error::BuildError> {
        crate::client::builder::ChatClientBuilder::new(endpoint).build()
    }

    /// Send one user message and return the canonical result.
    ///
    /// Attempts are strictly sequential: dispatch under a fresh deadline,
    /// classify, then either normalize (success), sleep and retry (transient
    /// failure with budget left), or surface a preformatted failure. The
    /// loop never issues two attempts concurrently and never propagates a
    /// raw error past this boundary.
    pub async fn send_message(&self, text: &str) -> ChatResult {
        let request = ChatRequest::new(text);
        let mut state = AttemptState {
            attempts_remaining: self.policy.max_retries,
            last_error: None,
        };

        loop {
            let attempt = self.policy.max_retries - state.attempts_remaining + 1;
            match &state.last_error {
                None => debug!(attempt, "dispatching chat request"),
                Some(prev) => debug!(attempt, prev_kind = %prev.kind, "dispatching retry"),
            }

            let outcome = self.transport.send(&request, self.deadline).await;

            match classify(outcome) {
                Ok(payload) => {
                    let reply = normalize(&payload);
                    info!(attempt, source = %reply.source, "chat request succeeded");
                    return Ok(reply);
                }
                Err(classified) => {
                    warn!(
                        kind = %classified.kind,
                        attempts_remaining = state.attempts_remaining,
                        "attempt failed"
                    );

                    match self
                        .policy
                        .decide(classified.kind, state.attempts_remaining)
                    {
                        Decision::Retry { delay } => {
                            if !delay.is_zero() {
                                tokio::time::sleep(delay).await;
                            }
                            state.attempts_remaining -= 1;
                            state.last_error = Some(classified);
                        }
                        Decision::Fail => {
                            warn!(kind = %classified.kind, "chat request failed");
                            return Err(ChatFailure::from_classified(&classified));
                        }
                    }
                }
            }
        }
    }
}
