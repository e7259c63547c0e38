//! eventract - typed structured-output extraction over OpenAI-compatible
//! chat APIs.
//!
//! Declare the output shape as a Rust type, hand the client an instruction
//! and a sentence, and get the typed value back or a categorized error:
//!
//! ```rust,ignore
//! use eventract::prelude::*;
//!
//! let client = OpenAI::from_env()?;
//! let event: CalendarEvent = client
//!     .extract(
//!         "Extract the event information.",
//!         "Alice and Bob are going to a science fair on Friday.",
//!     )
//!     .await?;
//! ```

pub mod chat;
pub mod error;
pub mod event;
pub mod extract;
pub mod llms;
pub mod message;
pub mod prelude;
pub mod usage;

pub use error::{Error, LlmError, Result, SchemaError};
