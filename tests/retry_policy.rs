//! Retry policy schedule and budget tests.

use chat_relay::{Decision, ErrorKind, RetryPolicy};
use std::time::Duration;

fn delay_ms(decision: Decision) -> u64 {
    match decision {
        Decision::Retry { delay } => delay.as_millis() as u64,
        Decision::Fail => panic!("expected a retry decision"),
    }
}

#[test]
fn test_gateway_backoff_schedule() {
    let policy = RetryPolicy::default();
    // Budget counts down 3, 2, 1 across the three retries.
    assert_eq!(delay_ms(policy.decide(ErrorKind::GatewayTimeout, 3)), 1000);
    assert_eq!(delay_ms(policy.decide(ErrorKind::GatewayTimeout, 2)), 2000);
    assert_eq!(delay_ms(policy.decide(ErrorKind::GatewayTimeout, 1)), 3000);
}

#[test]
fn test_client_timeout_backoff_schedule() {
    let policy = RetryPolicy::default();
    assert_eq!(delay_ms(policy.decide(ErrorKind::ClientTimeout, 3)), 2000);
    assert_eq!(delay_ms(policy.decide(ErrorKind::ClientTimeout, 2)), 4000);
    assert_eq!(delay_ms(policy.decide(ErrorKind::ClientTimeout, 1)), 6000);
}

#[test]
fn test_exhausted_budget_always_fails() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.decide(ErrorKind::GatewayTimeout, 0), Decision::Fail);
    assert_eq!(policy.decide(ErrorKind::ClientTimeout, 0), Decision::Fail);
}

#[test]
fn test_terminal_kinds_never_retry() {
    let policy = RetryPolicy::default();
    for kind in [
        ErrorKind::HttpError,
        ErrorKind::MalformedBody,
        ErrorKind::NetworkFailure,
        ErrorKind::EmptyResponse,
    ] {
        assert_eq!(
            policy.decide(kind, 3),
            Decision::Fail,
            "kind {kind} should be terminal"
        );
    }
}

#[test]
fn test_custom_backoff_override() {
    let policy = RetryPolicy::new(2).with_backoff(
        Duration::from_millis(10),
        Duration::from_millis(20),
    );
    assert_eq!(delay_ms(policy.decide(ErrorKind::GatewayTimeout, 2)), 10);
    assert_eq!(delay_ms(policy.decide(ErrorKind::GatewayTimeout, 1)), 20);
    assert_eq!(delay_ms(policy.decide(ErrorKind::ClientTimeout, 2)), 20);
    assert_eq!(policy.decide(ErrorKind::GatewayTimeout, 0), Decision::Fail);
}
