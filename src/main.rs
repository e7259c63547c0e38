//! Demo binary: extract a calendar event from a hard-coded sentence.
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run
//! ```

#![allow(clippy::print_stdout)]

use eventract::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Mirror of python-dotenv: a missing .env file is not an error.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = OpenAI::from_env()?;

    let event: CalendarEvent = client
        .extract(
            "Extract the event information.",
            "Alice and Bob are going to a science fair on Friday.",
        )
        .await?;

    println!("name: {}", event.name);
    println!("date: {}", event.date);
    println!("participants: {}", event.participants.join(", "));

    Ok(())
}
