//! OpenAI ChatProvider implementation.

use async_trait::async_trait;
use tracing::debug;

use crate::chat::{ChatProvider, ChatRequest, ChatResponse, StopReason};
use crate::error::{LlmError, Result};
use crate::message::{Message, Role};

use super::client::OpenAI;
use super::types::OpenAIChatResponse;

impl OpenAI {
    /// Parse the response into ChatResponse.
    pub(crate) fn parse_response(response: OpenAIChatResponse) -> Result<ChatResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::response_format("at least one choice", "empty choices"))?;

        let stop_reason = match choice.finish_reason.as_deref() {
            Some("length") => StopReason::Length,
            Some("content_filter") => StopReason::ContentFilter,
            // "stop", None, and any other value defaults to Stop
            _ => StopReason::Stop,
        };

        let message = Message {
            role: Role::Assistant,
            content: choice.message.content,
            refusal: choice.message.refusal,
        };

        Ok(ChatResponse {
            message,
            stop_reason,
            usage: response.usage,
            model: Some(response.model),
            id: Some(response.id),
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAI {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = self.chat_url();
        let body = self.build_body(request);

        debug!(model = %body.model, messages = body.messages.len(), "sending chat completion request");

        let response = self.build_request(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status.as_u16(), &error_text).into());
        }

        let response_text = response.text().await?;
        let parsed: OpenAIChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            LlmError::response_format(
                "valid OpenAI response",
                format!("parse error: {e}, response: {response_text}"),
            )
        })?;

        debug!(id = %parsed.id, model = %parsed.model, "received chat completion response");

        Self::parse_response(parsed)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn default_model(&self) -> &str {
        self.model()
    }

    fn supports_json_mode(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn response_json(choices: &str) -> String {
        format!(
            r#"{{
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "created": 1700000000,
                "model": "gpt-5",
                "choices": {choices}
            }}"#
        )
    }

    #[test]
    fn parse_response_takes_first_choice() {
        let json = response_json(
            r#"[{"index": 0, "message": {"role": "assistant", "content": "hello"}, "finish_reason": "stop"}]"#,
        );
        let parsed: OpenAIChatResponse = serde_json::from_str(&json).unwrap();
        let response = OpenAI::parse_response(parsed).unwrap();

        assert_eq!(response.text(), Some("hello"));
        assert_eq!(response.stop_reason, StopReason::Stop);
        assert_eq!(response.id.as_deref(), Some("chatcmpl-1"));
    }

    #[test]
    fn parse_response_maps_finish_reasons() {
        let json = response_json(
            r#"[{"index": 0, "message": {"role": "assistant", "content": "x"}, "finish_reason": "length"}]"#,
        );
        let parsed: OpenAIChatResponse = serde_json::from_str(&json).unwrap();
        let response = OpenAI::parse_response(parsed).unwrap();
        assert_eq!(response.stop_reason, StopReason::Length);
    }

    #[test]
    fn parse_response_rejects_empty_choices() {
        let json = response_json("[]");
        let parsed: OpenAIChatResponse = serde_json::from_str(&json).unwrap();
        let result = OpenAI::parse_response(parsed);
        assert!(result.is_err());
    }

    #[test]
    fn parse_response_keeps_refusal() {
        let json = response_json(
            r#"[{"index": 0, "message": {"role": "assistant", "content": null, "refusal": "I can't help with that."}, "finish_reason": "stop"}]"#,
        );
        let parsed: OpenAIChatResponse = serde_json::from_str(&json).unwrap();
        let response = OpenAI::parse_response(parsed).unwrap();
        assert_eq!(
            response.message.refusal.as_deref(),
            Some("I can't help with that.")
        );
    }
}
