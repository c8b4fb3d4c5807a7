use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, warn};

use crate::application::ChatClient;
use crate::domain::{ChatRequest, ConversationState, DomainError, Message};

/// Assistant text used when the endpoint answers successfully but with no choices.
pub const NO_ANSWER_FALLBACK: &str = "Could not get a response from the AI.";

/// Relays user prompts to a [`ChatClient`] and records the exchange as a transcript.
///
/// Every non-blank [`submit`](Self::submit) appends exactly two messages: the
/// user's text, then one assistant message holding either the model's reply or
/// a description of what went wrong. Failures never escape `submit`.
///
/// Each request is single-turn: only the current prompt is sent, never the
/// earlier transcript, so the remote model has no memory of previous turns.
///
/// Overlapping `submit` calls are queued and run one at a time in call order.
/// Each call captures the pending input when it is made, before waiting its turn.
/// Dropping a `submit` future mid-request leaves the user message in place
/// without an assistant reply.
pub struct ConversationService {
    chat_client: Arc<dyn ChatClient>,
    state: Mutex<ConversationState>,
    submit_gate: AsyncMutex<()>,
}

impl ConversationService {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            state: Mutex::new(ConversationState::new()),
            submit_gate: AsyncMutex::new(()),
        }
    }

    /// Snapshot of the transcript in append order.
    pub fn history(&self) -> Vec<Message> {
        self.state().messages().to_vec()
    }

    pub fn input(&self) -> String {
        self.state().input().to_string()
    }

    /// Replaces the pending input verbatim. No trimming, no validation.
    pub fn set_input(&self, text: impl Into<String>) {
        self.state().set_input(text);
    }

    /// Sends the pending input and appends the exchange to the transcript.
    ///
    /// Returns the assistant message that was appended, or `None` when the
    /// input was blank and nothing happened.
    pub async fn submit(&self) -> Option<Message> {
        let prompt = {
            let state = self.state();
            if !state.has_submittable_input() {
                debug!("Ignoring submit with blank input");
                return None;
            }
            state.input().to_string()
        };

        let _turn = self.submit_gate.lock().await;

        self.state().push(Message::user(prompt.as_str()));
        info!(
            "Relaying prompt ({} chars) to {}",
            prompt.chars().count(),
            self.chat_client.model()
        );

        let reply = Message::assistant(self.reply_for(&prompt).await);

        let mut state = self.state();
        state.push(reply.clone());
        state.clear_input();
        debug!("Transcript now holds {} messages", state.len());

        Some(reply)
    }

    async fn reply_for(&self, prompt: &str) -> String {
        let request = ChatRequest::single_turn(self.chat_client.model(), prompt);

        match self.chat_client.complete(&request).await {
            Ok(completion) => match completion.first_content() {
                Some(content) => content.to_string(),
                None => {
                    warn!("Completion {} returned no choices", completion.id);
                    NO_ANSWER_FALLBACK.to_string()
                }
            },
            Err(e) => {
                warn!("Completion request failed: {e}");
                describe_failure(&e)
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, ConversationState> {
        // The lock is never held across an await; a poisoned state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Transcript text for a failed completion call.
pub fn describe_failure(err: &DomainError) -> String {
    match err {
        DomainError::Status { status } => format!("API error: {status}"),
        other => format!("Error: {other}"),
    }
}
