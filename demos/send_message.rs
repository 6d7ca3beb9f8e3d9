//! Minimal usage demo: send one message to a locally running backend.
//!
//! Run with: cargo run --example send_message -- "What's on the menu?"

use chat_relay::ChatClientBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello, how are you?".to_string());

    let client = ChatClientBuilder::new("http://localhost:8000/api/chat").build()?;

    match client.send_message(&message).await {
        Ok(reply) => println!("[{}] {}", reply.source, reply.text),
        Err(failure) => println!("{failure}"),
    }

    Ok(())
}
