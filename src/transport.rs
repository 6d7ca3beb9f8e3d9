//! Network dispatch for the chat backend.
//!
//! One attempt is one POST with an enforced deadline; everything the wire can
//! produce is folded into [`RawOutcome`] so classification stays out of the
//! transport layer.

mod http;

pub use http::{ChatRequest, HttpTransport, RawOutcome};

// Re-exported so callers and tests can build `RawOutcome` values without
// depending on reqwest directly.
pub use reqwest::StatusCode;
