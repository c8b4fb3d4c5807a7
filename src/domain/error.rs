use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The request never produced a response (connection refused, DNS, TLS, I/O).
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status. The body is not inspected.
    #[error("{status}")]
    Status { status: StatusCode },

    /// A 2xx body that could not be decoded as a chat completion.
    #[error("{0}")]
    Decode(String),
}

impl DomainError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn status(status: StatusCode) -> Self {
        Self::Status { status }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_reason_phrase() {
        let err = DomainError::status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "500 Internal Server Error");
        assert!(err.is_status());
        assert!(!err.is_transport());
    }

    #[test]
    fn transport_display_is_bare_description() {
        let err = DomainError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.is_transport());
    }

    #[test]
    fn decode_counts_as_transport_failure() {
        assert!(DomainError::decode("missing field `choices`").is_transport());
    }
}
