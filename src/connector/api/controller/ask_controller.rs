use anyhow::Result;

use crate::domain::Message;

use super::super::Container;
use super::format_message;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, prompt: String) -> Result<String> {
        let conversation = self.container.conversation();
        conversation.set_input(prompt);
        conversation.submit().await;
        Ok(self.format_transcript(&conversation.history()))
    }

    fn format_transcript(&self, messages: &[Message]) -> String {
        if messages.is_empty() {
            return "Nothing to send.".to_string();
        }

        messages
            .iter()
            .map(format_message)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::connector::adapter::MockChatClient;

    #[tokio::test]
    async fn test_ask_prints_exchange() {
        let container = Container::with_chat_client(Arc::new(MockChatClient::new()));

        let output = AskController::new(&container).ask("ping".to_string()).await.unwrap();

        assert_eq!(output, "you> ping\nai> echo: ping");
    }

    #[tokio::test]
    async fn test_ask_with_blank_prompt() {
        let container = Container::with_chat_client(Arc::new(MockChatClient::new()));

        let output = AskController::new(&container).ask("  ".to_string()).await.unwrap();

        assert_eq!(output, "Nothing to send.");
    }
}
