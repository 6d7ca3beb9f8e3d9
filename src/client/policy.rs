use crate::error::ErrorKind;
use std::time::Duration;

/// How to proceed after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Retry { delay: Duration },
    Fail,
}

/// Retry/fail policy for a single `send_message` call.
///
/// Prefer deterministic, explainable behavior: only the two transient
/// timeout kinds are ever retried, the budget is a plain counter, and the
/// backoff is linear in the number of retries already taken.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum retries per call (so `max_retries + 1` total attempts).
    pub max_retries: u32,
    /// Backoff step for gateway timeouts (HTTP 504).
    pub gateway_backoff: Duration,
    /// Backoff step for local deadline timeouts. Longer than the gateway
    /// step: a client-side timeout implies more severe unresponsiveness.
    pub timeout_backoff: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            gateway_backoff: Duration::from_millis(1000),
            timeout_backoff: Duration::from_millis(2000),
        }
    }

    /// Override the backoff steps. Primarily for tests that exercise the
    /// retry loop without waiting out the production schedule.
    pub fn with_backoff(mut self, gateway: Duration, timeout: Duration) -> Self {
        self.gateway_backoff = gateway;
        self.timeout_backoff = timeout;
        self
    }

    /// Decide what to do after a failure of `kind` with `attempts_remaining`
    /// retries left in the budget.
    ///
    /// The delay grows with the retry ordinal: with the default budget of 3,
    /// gateway timeouts wait 1s, 2s, 3s and client timeouts 2s, 4s, 6s.
    pub fn decide(&self, kind: ErrorKind, attempts_remaining: u32) -> Decision {
        if attempts_remaining == 0 || !kind.is_transient() {
            return Decision::Fail;
        }

        let step = match kind {
            ErrorKind::GatewayTimeout => self.gateway_backoff,
            ErrorKind::ClientTimeout => self.timeout_backoff,
            _ => unreachable!("non-transient kinds fail above"),
        };

        // Retries taken so far, counted down from the initial budget.
        let ordinal = self
            .max_retries
            .saturating_add(1)
            .saturating_sub(attempts_remaining);
        Decision::Retry {
            delay: step.saturating_mul(ordinal),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RETRIES)
    }
}
