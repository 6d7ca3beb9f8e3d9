//! # chat-relay
//!
//! A resilient client-side request layer for a conversational backend.
//!
//! The backend answers `POST /api/chat` with a heterogeneous body (a plain
//! string, or a nested object carrying the primary message under different
//! keys), and the network path is unreliable: slow gateways, aborted
//! connections, malformed bodies. This crate owns the request/response
//! orchestration in between:
//!
//! - **Bounded-latency dispatch**: every attempt runs under a deadline and is
//!   cancelled locally when it fires.
//! - **Failure classification**: every non-success outcome is mapped to one
//!   of a closed set of [`ErrorKind`]s.
//! - **Bounded retry with backoff**: transient timeout kinds are retried up
//!   to a fixed budget with linear backoff; everything else fails fast.
//! - **Normalization**: successes collapse into [`Reply`] and failures into a
//!   preformatted [`ChatFailure`], so the UI never branches on error shape.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chat_relay::ChatClientBuilder;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ChatClientBuilder::new("http://localhost:8000/api/chat")
//!         .build()
//!         .expect("valid endpoint");
//!
//!     match client.send_message("What's on the menu today?").await {
//!         Ok(reply) => println!("[{}] {}", reply.source, reply.text),
//!         Err(failure) => println!("{}", failure),
//!     }
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Chat client, builder, retry policy, classification, normalization |
//! | [`transport`] | HTTP dispatch with per-attempt deadline enforcement |
//! | [`error`] | Error taxonomy and the UI-facing failure type |

pub mod client;
pub mod transport;

/// Error taxonomy for the crate.
pub mod error;

// Re-export main types for convenience
pub use client::{
    classify, normalize, ChatClient, ChatClientBuilder, Decision, Reply, RetryPolicy,
};
pub use error::{BuildError, ChatFailure, ClassifiedError, ErrorKind};
pub use transport::{ChatRequest, HttpTransport, RawOutcome};

/// The canonical result handed to the UI layer: a normalized reply, or a
/// failure whose display text is already formatted for the end user.
pub type ChatResult = std::result::Result<Reply, ChatFailure>;
