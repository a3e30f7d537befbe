//! Error types for the mission API
//!
//! Operation failures keep their kind so callers can branch on it:
//! - `NotFound`: the request was valid but no record matched
//! - `Transport`: network or service failure, optionally with a server message

/// Text used when a transport failure carries no message
pub const UPLINK_FAILURE_MESSAGE: &str = "uplink failure — unable to sync mission parameters";

/// Failure of a [`ScenarioApi`](crate::ScenarioApi) operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No scenario matches the identifier
    #[error("scenario not found")]
    NotFound,

    /// Network or service failure
    #[error("{}", .message.as_deref().filter(|m| !m.trim().is_empty()).unwrap_or(UPLINK_FAILURE_MESSAGE))]
    Transport {
        /// Server or transport supplied message, if any
        message: Option<String>,
    },
}

impl ApiError {
    /// Transport failure with a message; blank messages are dropped
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Transport {
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    /// Transport failure without any message
    #[inline]
    #[must_use]
    pub fn transport_silent() -> Self {
        Self::Transport { message: None }
    }

    /// Message carried by the failure, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NotFound => None,
            Self::Transport { message } => message.as_deref().filter(|m| !m.trim().is_empty()),
        }
    }

    /// Check if error is retryable
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if the record does not exist
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Failure while constructing an HTTP client
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    /// Base URL cannot be parsed or cannot carry path segments
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// HTTP backend initialization failed
    #[error("http client initialization failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_display_uses_message() {
        let err = ApiError::transport("mission store offline");
        assert_eq!(err.to_string(), "mission store offline");
        assert_eq!(err.message(), Some("mission store offline"));
    }

    #[test]
    fn blank_messages_fall_back() {
        assert_eq!(ApiError::transport("   ").message(), None);
        assert_eq!(ApiError::transport("").to_string(), UPLINK_FAILURE_MESSAGE);
        assert_eq!(ApiError::transport_silent().to_string(), UPLINK_FAILURE_MESSAGE);

        // Built directly, bypassing the normalizing constructor
        let raw = ApiError::Transport {
            message: Some(String::new()),
        };
        assert_eq!(raw.to_string(), UPLINK_FAILURE_MESSAGE);
        assert_eq!(raw.message(), None);
    }

    #[test]
    fn retryability() {
        assert!(ApiError::transport("boom").is_retryable());
        assert!(!ApiError::NotFound.is_retryable());
        assert!(ApiError::NotFound.is_not_found());
    }
}
