//! Error types for the Slack client.
//!
//! Maps remote API rejections, transport faults, and configuration
//! problems to a single typed hierarchy.

use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for Slack integration
#[derive(Error, Debug)]
pub enum SlackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Request construction error
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing error
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Remote operation rejected with an error code
    #[error("API error: {code}")]
    Api {
        /// Slack error code, exactly as returned by the remote
        code: String,
    },

    /// A display name could not be resolved to an identifier
    #[error("Unknown name: {name}")]
    UnknownName {
        /// The name as supplied by the caller
        name: String,
    },
}

impl SlackError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "SLACK_CONFIG",
            Self::Request(_) => "SLACK_REQUEST",
            Self::Network(_) => "SLACK_NETWORK",
            Self::Response(_) => "SLACK_RESPONSE",
            Self::Api { .. } => "SLACK_API",
            Self::UnknownName { .. } => "SLACK_UNKNOWN_NAME",
        }
    }

    /// Remote error code, if this error came from an `ok=false` response
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            Self::Api { code } => Some(code),
            _ => None,
        }
    }

    /// Check whether the remote rejected the credential itself
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.remote_code(),
            Some("not_authed" | "invalid_auth" | "account_inactive" | "token_revoked")
        )
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing token
    #[error("API token is missing")]
    MissingToken,

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },
}

/// Request construction errors
#[derive(Error, Debug)]
pub enum RequestError {
    /// Invalid form data
    #[error("Invalid form data: {message}")]
    InvalidFormData {
        /// Error message
        message: String,
    },

    /// Parameters did not serialize to an object
    #[error("Request parameters must serialize to an object")]
    ParametersNotObject,
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError {
        /// Error message
        message: String,
    },

    /// Unexpected response format
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Error message
        message: String,
    },

    /// Missing "ok" field
    #[error("Missing 'ok' field in response")]
    MissingOkField,
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::DeserializationError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_code() {
        let err = SlackError::Api {
            code: "channel_not_found".to_string(),
        };
        assert_eq!(err.remote_code(), Some("channel_not_found"));

        let err = SlackError::Network(NetworkError::Timeout);
        assert_eq!(err.remote_code(), None);
    }

    #[test]
    fn test_is_auth_error() {
        assert!(SlackError::Api {
            code: "invalid_auth".to_string()
        }
        .is_auth_error());
        assert!(SlackError::Api {
            code: "token_revoked".to_string()
        }
        .is_auth_error());
        assert!(!SlackError::Api {
            code: "msg_too_long".to_string()
        }
        .is_auth_error());
        assert!(!SlackError::Configuration(ConfigurationError::MissingToken).is_auth_error());
    }

    #[test]
    fn test_error_code_classification() {
        assert_eq!(
            SlackError::Configuration(ConfigurationError::MissingToken).error_code(),
            "SLACK_CONFIG"
        );
        assert_eq!(
            SlackError::UnknownName {
                name: "#nowhere".to_string()
            }
            .error_code(),
            "SLACK_UNKNOWN_NAME"
        );
    }
}
