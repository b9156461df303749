//! Unified error handling for wishlink-core

use thiserror::Error;

/// Core error type for wishlink-core
///
/// Every failure a user action can hit maps onto exactly one of these
/// variants, so the CLI renders all of them the same way.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for wishlink-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Error::Auth(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }
}

/// Pull a human-readable message out of an error response body.
///
/// The backend usually answers errors with `{"message": "..."}` but is not
/// consistent about it; fall back to the raw body, then to the status text.
fn extract_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
            if !msg.is_empty() {
                return msg.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= 200 {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

/// Classify a non-success HTTP response into the error taxonomy.
///
/// Every endpoint call funnels its failure path through here so the mapping
/// from status codes to error variants lives in one place.
pub fn classify_response(status: reqwest::StatusCode, body: &str) -> Error {
    let message = extract_message(status, body);
    match status.as_u16() {
        401 => Error::Auth(message),
        403 => Error::Forbidden(message),
        404 => Error::NotFound(message),
        409 => Error::Conflict(message),
        code => Error::Api {
            status: code,
            message,
        },
    }
}

// Convert to String for simple display contexts
impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_display() {
        let err = Error::auth("Invalid token");
        assert_eq!(err.to_string(), "Authentication error: Invalid token");
    }

    #[test]
    fn test_classify_unauthorized() {
        let err =
            classify_response(StatusCode::UNAUTHORIZED, r#"{"message":"Invalid credentials"}"#);
        match err {
            Error::Auth(msg) => assert_eq!(msg, "Invalid credentials"),
            other => panic!("expected Auth, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_forbidden() {
        assert!(matches!(
            classify_response(StatusCode::FORBIDDEN, ""),
            Error::Forbidden(_)
        ));
    }

    #[test]
    fn test_classify_not_found() {
        assert!(matches!(
            classify_response(StatusCode::NOT_FOUND, "no such gift"),
            Error::NotFound(_)
        ));
    }

    #[test]
    fn test_classify_conflict() {
        let err = classify_response(
            StatusCode::CONFLICT,
            r#"{"message":"Gift already reserved"}"#,
        );
        match err {
            Error::Conflict(msg) => assert_eq!(msg, "Gift already reserved"),
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_other_status() {
        let err = classify_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_message_falls_back_to_body() {
        let err = classify_response(StatusCode::BAD_REQUEST, "price must be positive");
        match err {
            Error::Api { message, .. } => assert_eq!(message, "price must be positive"),
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_error_conversion_to_string() {
        let err = Error::validation("Invalid input");
        let s: String = err.into();
        assert!(s.contains("Validation error"));
    }
}
