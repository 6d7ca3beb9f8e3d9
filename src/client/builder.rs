use crate::client::core::ChatClient;
use crate::client::policy::RetryPolicy;
use crate::error::BuildError;
use crate::transport::HttpTransport;
use std::time::Duration;

/// Default per-attempt deadline.
const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

/// Builder for creating chat clients with custom configuration.
///
/// Keep this surface area small and predictable: the endpoint, the
/// per-attempt deadline, and the retry budget cover everything the core
/// needs to know.
pub struct ChatClientBuilder {
    endpoint: String,
    deadline: Duration,
    max_retries: u32,
    backoff_override: Option<(Duration, Duration)>,
}

impl ChatClientBuilder {
    /// `endpoint` is the full chat URL (e.g. `http://localhost:8000/api/chat`).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            deadline: DEFAULT_DEADLINE,
            max_retries: RetryPolicy::DEFAULT_MAX_RETRIES,
            backoff_override: None,
        }
    }

    /// Set the per-attempt deadline. Default is 30 seconds; each attempt in
    /// a call (including retries) gets a fresh timer of this length.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Set the maximum number of retries per `send_message` call. Default is
    /// 3 (4 total attempts).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Override the backoff steps for gateway and client timeouts.
    ///
    /// This is primarily for testing the retry loop without waiting out the
    /// production schedule. In production, keep the defaults.
    pub fn backoff(mut self, gateway: Duration, timeout: Duration) -> Self {
        self.backoff_override = Some((gateway, timeout));
        self
    }

    /// Build the client. Fails on an unparseable endpoint URL or if the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<ChatClient, BuildError> {
        let transport = HttpTransport::new(&self.endpoint)?;

        let mut policy = RetryPolicy::new(self.max_retries);
        if let Some((gateway, timeout)) = self.backoff_override {
            policy = policy.with_backoff(gateway, timeout);
        }

        Ok(ChatClient {
            transport,
            deadline: self.deadline,
            policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparseable_endpoint() {
        let result = ChatClientBuilder::new("not a url").build();
        assert!(matches!(result, Err(BuildError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_defaults() {
        let client = ChatClientBuilder::new("http://localhost:8000/api/chat")
            .build()
            .expect("valid endpoint");
        assert_eq!(client.deadline, Duration::from_secs(30));
        assert_eq!(client.policy.max_retries, 3);
    }
}
