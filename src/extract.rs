//! Structured extraction over any [`ChatProvider`].
//!
//! One request, one typed result: the output schema is inferred from the
//! target Rust type, sent along with the instruction and input text, and the
//! reply is decoded back into that type. A reply that does not conform fails
//! with [`SchemaError`] rather than yielding a partial value.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::chat::{ChatProvider, ChatRequest};
use crate::error::{Result, SchemaError};

/// Extension trait adding one-shot structured extraction to any provider.
#[async_trait]
pub trait ExtractorExt: ChatProvider {
    /// Extract a typed value from natural-language text.
    ///
    /// Sends `instruction` as the system message and `input` as the user
    /// message, requesting a response that conforms to the JSON schema of
    /// `T`. Blocks (asynchronously) until the service responds or the
    /// request fails; there are no retries and no intermediate states.
    ///
    /// # Errors
    ///
    /// - [`Error::Llm`](crate::Error::Llm) if the request cannot be sent or
    ///   the service rejects it
    /// - [`Error::Schema`](crate::Error::Schema) if the reply is a refusal,
    ///   is empty, or does not decode into `T`
    async fn extract<T>(&self, instruction: &str, input: &str) -> Result<T>
    where
        T: DeserializeOwned + JsonSchema + Send,
    {
        let request = ChatRequest::new(self.default_model())
            .system(instruction)
            .user(input)
            .output_type::<T>();

        let schema_name = request
            .response_format
            .as_ref()
            .and_then(|f| f.schema_name())
            .unwrap_or("unknown")
            .to_owned();

        debug!(provider = self.provider_name(), schema = %schema_name, "extracting structured output");

        let response = self.chat(&request).await?;

        if let Some(refusal) = &response.message.refusal {
            return Err(SchemaError::Refused(refusal.clone()).into());
        }

        let text = response
            .text()
            .filter(|t| !t.is_empty())
            .ok_or(SchemaError::EmptyResponse)?;

        let value =
            serde_json::from_str(text).map_err(|e| SchemaError::decode(&schema_name, e))?;

        Ok(value)
    }
}

// Blanket implementation for all ChatProviders
impl<T: ChatProvider + ?Sized> ExtractorExt for T {}
