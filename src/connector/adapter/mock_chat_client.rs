use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{ChatCompletion, ChatMessage, ChatRequest, Choice, DomainError};

const MOCK_MODEL: &str = "mock-echo";

/// Offline [`ChatClient`] that answers every prompt with `echo: <prompt>`.
pub struct MockChatClient {
    model: String,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            model: MOCK_MODEL.to_string(),
        }
    }

    pub fn echo(prompt: &str) -> String {
        format!("echo: {prompt}")
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, DomainError> {
        let prompt = request.prompt().unwrap_or_default();

        debug!("Echoing {} chars", prompt.len());

        Ok(ChatCompletion {
            id: "mock-completion".to_string(),
            choices: vec![Choice {
                index: 0,
                message: ChatMessage::new("assistant", Self::echo(prompt)),
                finish_reason: Some("stop".to_string()),
            }],
        })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
