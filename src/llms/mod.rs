//! LLM backend implementations.
//!
//! Each backend is organized into its own submodule.
//!
//! # Available Backends
//!
//! - [`openai`] - OpenAI API and compatible endpoints

pub mod openai;

pub use openai::{OpenAI, OpenAIConfig};
