use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ChatCompletion, ChatRequest, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";
/// Sent when no key is configured. Requests then fail authentication upstream.
pub const PLACEHOLDER_API_KEY: &str = "your_api_key";
const COMPLETIONS_PATH: &str = "/chat/completions";

/// Connection settings for [`GroqClient`].
///
/// | Variable        | Default                          |
/// |-----------------|----------------------------------|
/// | `GROQ_API_KEY`  | `your_api_key` (placeholder)     |
/// | `GROQ_MODEL`    | `llama-3.1-70b-versatile`        |
/// | `GROQ_BASE_URL` | `https://api.groq.com/openai/v1` |
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GroqConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            api_key: lookup("GROQ_API_KEY").unwrap_or(defaults.api_key),
            model: lookup("GROQ_MODEL").unwrap_or(defaults.model),
            base_url: lookup("GROQ_BASE_URL").unwrap_or(defaults.base_url),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn uses_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}

impl fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// HTTP client for the Groq chat completion endpoint (OpenAI-compatible).
///
/// No timeout is set beyond reqwest's defaults and nothing is retried.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Self {
        let url = format!("{}{}", config.base_url.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key,
            model: config.model,
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, DomainError> {
        debug!("POST {} (model {})", self.url, request.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::transport(describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GroqClient: API returned {status}");
            return Err(DomainError::status(status));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| DomainError::decode(describe(&e)))?;

        debug!(
            "Completion {} returned {} choice(s)",
            completion.id,
            completion.choices.len()
        );

        Ok(completion)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Error text with its source chain, e.g. `error sending request: connection refused`.
fn describe(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prompt_request(client: &GroqClient, prompt: &str) -> ChatRequest {
        ChatRequest::single_turn(client.model(), prompt)
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn config_falls_back_to_placeholder_key() {
        let config = GroqConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.api_key, PLACEHOLDER_API_KEY);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.uses_placeholder_key());
    }

    #[test]
    fn config_reads_overrides() {
        let config = GroqConfig::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("GROQ_MODEL", "llama-3.1-8b-instant"),
            ("GROQ_BASE_URL", "http://localhost:9000/v1"),
        ]));

        assert_eq!(config.api_key, "gsk-test");
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert!(!config.uses_placeholder_key());
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = GroqConfig::default().with_api_key("gsk-secret");
        assert!(!format!("{config:?}").contains("gsk-secret"));
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let client = GroqClient::new(GroqConfig::default().with_base_url("http://host/v1/"));
        assert_eq!(client.url(), "http://host/v1/chat/completions");
    }

    #[test]
    fn default_url_targets_groq() {
        let client = GroqClient::new(GroqConfig::default());
        assert_eq!(
            client.url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn complete_sends_bearer_key_and_single_user_turn() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer gsk-test")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "model": "llama-3.1-70b-versatile",
                "messages": [{ "role": "user", "content": "hello" }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id":"c1","choices":[{"index":0,"message":{"role":"assistant","content":"hi there"},"finish_reason":"stop"}]}"#,
            )
            .create_async()
            .await;

        let client = GroqClient::new(
            GroqConfig::default()
                .with_api_key("gsk-test")
                .with_base_url(server.url()),
        );
        let completion = client.complete(&prompt_request(&client, "hello")).await.unwrap();

        assert_eq!(completion.first_content(), Some("hi there"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_not_parsed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body(r#"{"choices":[{"message":{"content":"should not be read"}}]}"#)
            .create_async()
            .await;

        let client = GroqClient::new(GroqConfig::default().with_base_url(server.url()));
        let err = client.complete(&prompt_request(&client, "hello")).await.unwrap_err();

        assert!(err.is_status());
        assert_eq!(err.to_string(), "500 Internal Server Error");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = GroqClient::new(GroqConfig::default().with_base_url(server.url()));
        let err = client.complete(&prompt_request(&client, "hello")).await.unwrap_err();

        assert!(matches!(err, DomainError::Decode(_)));
    }
}
