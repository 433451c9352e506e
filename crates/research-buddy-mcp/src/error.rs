//! Error types for the Research Buddy MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! PDF extraction reports its failures as text and has no error type here.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Still rate limited (429) after the whole retry budget.
    #[error("Rate limited by Semantic Scholar API after {attempts} attempts")]
    RateLimited {
        /// Attempts made before giving up
        attempts: u32,
    },

    /// Request could not complete within the retry budget.
    #[error("API request failed: {message}")]
    RequestFailed {
        /// Description of the last failure
        message: String,
    },

    /// Request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create a rate limited error.
    #[must_use]
    pub const fn rate_limited(attempts: u32) -> Self {
        Self::RateLimited { attempts }
    }

    /// Create a request failure.
    #[must_use]
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed { message: message.into() }
    }

    /// Returns true if the upstream rate limit caused this error.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::RateLimited { attempts }) => {
                format!(
                    "Rate limited by Semantic Scholar API ({attempts} attempts). \
                     Please wait before retrying, or configure an API key."
                )
            }
            Self::Client(ClientError::RequestFailed { message }) => {
                format!("API request failed: {message}")
            }
            Self::Serialization(e) => format!("Invalid arguments: {e}"),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message() {
        let err = ClientError::request_failed("connection refused");
        assert_eq!(err.to_string(), "API request failed: connection refused");
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_rate_limited() {
        let err = ClientError::rate_limited(3);
        assert!(err.is_rate_limited());
        assert!(err.to_string().contains("3 attempts"));
    }

    #[test]
    fn test_tool_error_user_message() {
        let err = ToolError::from(ClientError::rate_limited(3));
        assert!(err.to_user_message().contains("API key"));

        let err = ToolError::from(ClientError::request_failed("HTTP 500"));
        assert_eq!(err.to_user_message(), "API request failed: HTTP 500");
    }

    #[test]
    fn test_tool_error_from_bad_arguments() {
        let parse_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = ToolError::from(parse_err);
        assert!(err.to_user_message().starts_with("Invalid arguments"));
    }
}
