//! Error type for marketplace API calls

use serde::Deserialize;
use thiserror::Error;

/// Everything that can go wrong talking to the marketplace API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected a write and returned human-readable messages
    #[error("request rejected: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Non-2xx response without a validation error list
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// Network, TLS, timeout or other transport failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL or a derived endpoint is not a valid URL
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// User-facing messages for this error
    ///
    /// Validation errors are returned verbatim, everything else collapses to
    /// a single message.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Validation(messages) => messages.clone(),
            ApiError::Status { message, .. } => vec![message.clone()],
            other => vec![other.to_string()],
        }
    }

    /// HTTP status if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Build an error from a non-2xx response body
    ///
    /// The server answers either `{"errors": [...]}` (form validation) or
    /// `{"message": "..."}` (not found, forbidden).
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            errors: Vec<String>,
            #[serde(default)]
            message: Option<String>,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { errors, .. }) if !errors.is_empty() => ApiError::Validation(errors),
            Ok(ErrorBody {
                message: Some(message),
                ..
            }) => ApiError::Status { status, message },
            _ => ApiError::Status {
                status,
                message: default_reason(status).to_string(),
            },
        }
    }
}

fn default_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not found",
        500..=599 => "Server error",
        _ => "Unexpected response",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body() {
        let err = ApiError::from_response(400, r#"{"errors": ["name : Name can't be blank"]}"#);
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.messages(), vec!["name : Name can't be blank".to_string()]);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_message_body() {
        let err = ApiError::from_response(404, r#"{"message": "Item could not be found"}"#);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.messages(), vec!["Item could not be found".to_string()]);
    }

    #[test]
    fn test_empty_errors_falls_back_to_message() {
        let err = ApiError::from_response(403, r#"{"errors": [], "message": "Forbidden"}"#);
        assert_eq!(err.messages(), vec!["Forbidden".to_string()]);
    }

    #[test]
    fn test_unparseable_body() {
        let err = ApiError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.messages(), vec!["Server error".to_string()]);
    }
}
