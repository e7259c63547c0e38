//! Integration tests for structured extraction against a stub provider.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::sync::Mutex;

use async_trait::async_trait;
use eventract::prelude::*;

/// A stub provider that returns a canned response and records the request it
/// received, so tests can assert on the outgoing wire shape without network
/// access.
#[derive(Debug)]
struct StubProvider {
    response: Result<ChatResponse>,
    last_request: Mutex<Option<ChatRequest>>,
}

impl StubProvider {
    fn replying(response: ChatResponse) -> Self {
        Self {
            response: Ok(response),
            last_request: Mutex::new(None),
        }
    }

    fn failing(error: Error) -> Self {
        Self {
            response: Err(error),
            last_request: Mutex::new(None),
        }
    }

    fn last_request(&self) -> ChatRequest {
        self.last_request
            .lock()
            .unwrap()
            .clone()
            .expect("provider was never called")
    }
}

#[async_trait]
impl ChatProvider for StubProvider {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.response {
            Ok(response) => Ok(response.clone()),
            Err(Error::Llm(e)) => Err(Error::Llm(e.clone())),
            Err(other) => panic!("stub only supports LLM errors, got {other}"),
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    fn supports_json_mode(&self) -> bool {
        true
    }
}

const INSTRUCTION: &str = "Extract the event information.";
const INPUT: &str = "Alice and Bob are going to a science fair on Friday.";

#[tokio::test]
async fn extract_returns_fully_populated_event() {
    let provider = StubProvider::replying(ChatResponse::from_text(
        r#"{"name":"Science Fair","date":"Friday","participants":["Alice","Bob"]}"#,
    ));

    let event: CalendarEvent = provider.extract(INSTRUCTION, INPUT).await.unwrap();

    assert!(!event.name.is_empty());
    assert!(!event.date.is_empty());
    assert_eq!(event.participants.len(), 2);
    assert_eq!(event.participants, vec!["Alice", "Bob"]);
}

#[tokio::test]
async fn extract_sends_both_messages_and_strict_schema() {
    let provider = StubProvider::replying(ChatResponse::from_text(
        r#"{"name":"Science Fair","date":"Friday","participants":["Alice","Bob"]}"#,
    ));

    let _: CalendarEvent = provider.extract(INSTRUCTION, INPUT).await.unwrap();
    let request = provider.last_request();

    assert_eq!(request.model, "stub-model");
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[0].text(), Some(INSTRUCTION));
    assert_eq!(request.messages[1].role, Role::User);
    assert_eq!(request.messages[1].text(), Some(INPUT));

    match request.response_format {
        Some(ResponseFormat::JsonSchema { json_schema }) => {
            assert_eq!(json_schema.name, "CalendarEvent");
            assert_eq!(json_schema.strict, Some(true));
            let required = json_schema.schema["required"].as_array().unwrap();
            assert_eq!(required.len(), 3);
        }
        other => panic!("expected a JSON schema response format, got {other:?}"),
    }
}

#[tokio::test]
async fn extract_fails_when_participants_missing() {
    let provider =
        StubProvider::replying(ChatResponse::from_text(r#"{"name":"Science Fair","date":"Friday"}"#));

    let result: Result<CalendarEvent> = provider.extract(INSTRUCTION, INPUT).await;

    match result {
        Err(Error::Schema(SchemaError::Decode { schema, .. })) => {
            assert_eq!(schema, "CalendarEvent");
        }
        other => panic!("expected a schema decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn extract_fails_on_empty_content() {
    let provider = StubProvider::replying(ChatResponse::new(Message {
        role: Role::Assistant,
        content: None,
        refusal: None,
    }));

    let result: Result<CalendarEvent> = provider.extract(INSTRUCTION, INPUT).await;
    assert!(matches!(
        result,
        Err(Error::Schema(SchemaError::EmptyResponse))
    ));
}

#[tokio::test]
async fn extract_surfaces_refusal_as_schema_error() {
    let provider = StubProvider::replying(ChatResponse::new(Message {
        role: Role::Assistant,
        content: None,
        refusal: Some("I can't help with that.".to_owned()),
    }));

    let result: Result<CalendarEvent> = provider.extract(INSTRUCTION, INPUT).await;
    assert!(matches!(
        result,
        Err(Error::Schema(SchemaError::Refused(_)))
    ));
}

#[tokio::test]
async fn extract_propagates_provider_errors() {
    let provider = StubProvider::failing(Error::Llm(LlmError::auth(
        "stub",
        "Incorrect API key provided",
    )));

    let result: Result<CalendarEvent> = provider.extract(INSTRUCTION, INPUT).await;
    assert!(matches!(result, Err(Error::Llm(LlmError::Auth { .. }))));
}

#[test]
fn missing_credential_fails_before_any_network_io() {
    // Constructing a client with an empty credential is the pre-flight check:
    // no request type is ever built and no socket is opened.
    let result = OpenAI::new(OpenAIConfig::new(""));
    match result {
        Err(Error::Config(message)) => assert!(message.contains("API key")),
        other => panic!("expected a configuration error, got {other:?}"),
    }
}
