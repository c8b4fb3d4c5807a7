use serde::{Deserialize, Serialize};

/// One entry of the visible transcript.
///
/// Messages are immutable once created; the transcript only ever appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    content: String,
    #[serde(rename = "isUser", default)]
    is_user: bool,
}

impl Message {
    pub fn new(content: impl Into<String>, is_user: bool) -> Self {
        Self {
            content: content.into(),
            is_user,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, true)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, false)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_user(&self) -> bool {
        self.is_user
    }

    pub fn speaker(&self) -> &'static str {
        if self.is_user {
            "you"
        } else {
            "ai"
        }
    }
}
