//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use eventract::prelude::*;
//! ```

pub use crate::chat::{
    ChatProvider, ChatRequest, ChatResponse, JsonSchemaSpec, ResponseFormat, SharedChatProvider,
    StopReason,
};
pub use crate::error::{Error, LlmError, Result, SchemaError};
pub use crate::event::CalendarEvent;
pub use crate::extract::ExtractorExt;
pub use crate::llms::{OpenAI, OpenAIConfig};
pub use crate::message::{Message, Role};
pub use crate::usage::Usage;
