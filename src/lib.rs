pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{describe_failure, ChatClient, ConversationService, NO_ANSWER_FALLBACK};

pub use connector::{
    Container, ContainerConfig, GroqClient, GroqConfig, MockChatClient, Router, DEFAULT_BASE_URL,
    DEFAULT_MODEL, PLACEHOLDER_API_KEY,
};

pub use domain::{
    ChatCompletion, ChatMessage, ChatRequest, Choice, ConversationState, DomainError, Message,
};
