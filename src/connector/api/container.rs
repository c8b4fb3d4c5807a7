use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ChatClient, ConversationService};
use crate::connector::adapter::{GroqClient, GroqConfig, MockChatClient};

pub struct ContainerConfig {
    /// Answer prompts locally with [`MockChatClient`] instead of calling the API.
    pub mock: bool,
    /// Overrides `GROQ_MODEL` / the default model.
    pub model: Option<String>,
    /// Overrides `GROQ_BASE_URL` / the default endpoint.
    pub base_url: Option<String>,
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    conversation: Arc<ConversationService>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Arc<dyn ChatClient> = if config.mock {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            let mut groq_config = GroqConfig::from_env();
            if let Some(model) = config.model {
                groq_config = groq_config.with_model(model);
            }
            if let Some(base_url) = config.base_url {
                groq_config = groq_config.with_base_url(base_url);
            }
            if groq_config.uses_placeholder_key() {
                warn!("GROQ_API_KEY is not set; using placeholder key, requests will be rejected");
            }
            debug!("Using Groq chat client: {:?}", groq_config);
            Arc::new(GroqClient::new(groq_config))
        };

        Self::with_chat_client(chat_client)
    }

    pub fn with_chat_client(chat_client: Arc<dyn ChatClient>) -> Self {
        let conversation = Arc::new(ConversationService::new(Arc::clone(&chat_client)));
        Self {
            chat_client,
            conversation,
        }
    }

    pub fn conversation(&self) -> Arc<ConversationService> {
        Arc::clone(&self.conversation)
    }

    pub fn model(&self) -> &str {
        self.chat_client.model()
    }
}
