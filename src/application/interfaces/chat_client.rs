use async_trait::async_trait;

use crate::domain::{ChatCompletion, ChatRequest, DomainError};

/// Sends a chat completion request and returns the decoded response.
///
/// Implementors own transport, authentication, and serialization. A non-2xx
/// answer must surface as [`DomainError::Status`] without reading the body;
/// connection failures as [`DomainError::Transport`]; undecodable 2xx bodies
/// as [`DomainError::Decode`].
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, DomainError>;

    /// Model identifier placed in outgoing requests.
    fn model(&self) -> &str;
}
