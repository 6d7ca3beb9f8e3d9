//! Chat client interface.
//!
//! The public surface is deliberately small: build a [`ChatClient`], call
//! [`send_message`](ChatClient::send_message), display the result.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod classification;
pub mod core;
pub mod normalize;
pub mod policy;

pub use builder::ChatClientBuilder;
pub use classification::classify;
pub use core::ChatClient;
pub use normalize::{normalize, Reply};
pub use policy::{Decision, RetryPolicy};
