//! Error types for query construction and API requests.

/// Result type for client operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building a search query
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Operator symbol outside `=`, `~`, `>`, `<`, `>=`, `<=`
    #[error("Unknown operator: {0}")]
    InvalidOperator(String),

    /// Condition text with no operator at all (only from [`parse_condition`](crate::query::parse_condition))
    #[error("Malformed condition: {0}")]
    MalformedCondition(String),
}

/// Errors that can occur when talking to the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport could not complete the request
    #[error("HTTP transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The API answered with a non-200 status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request is incomplete and was not sent
    #[error("Invalid request: {0}")]
    InvalidRequest(&'static str),

    /// Base URL or endpoint path did not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Wrap any transport-level failure
    pub fn transport(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Transport(Box::new(e))
    }

    /// HTTP status code for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_operator_names_symbol() {
        let err = QueryError::InvalidOperator("!=".to_string());
        assert_eq!(err.to_string(), "Unknown operator: !=");
    }

    #[test]
    fn test_api_error_display_and_status() {
        let err = Error::Api {
            status: 404,
            message: "sheet not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): sheet not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(Error::InvalidRequest("x").status(), None);
    }
}
