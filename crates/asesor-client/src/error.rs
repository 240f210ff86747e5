use serde_json::Value;
use thiserror::Error;

use asesor_stream::StreamError;

pub(crate) const FALLBACK_ERROR_MESSAGE: &str = "connection error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the session token; it has been cleared.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Non-success response with the server's standardized message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Login response carried no access token.
    #[error("login response carried no access token")]
    MissingToken,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Stream(#[from] StreamError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Pull the standardized message out of an error body: `message` first,
/// then `description`.
pub(crate) fn extract_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("description").and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_field_preferred() {
        let body = json!({ "message": "bad request", "description": "ignored" });
        assert_eq!(extract_message(&body).unwrap(), "bad request");
    }

    #[test]
    fn test_description_fallback() {
        let body = json!({ "description": "workspace not found" });
        assert_eq!(extract_message(&body).unwrap(), "workspace not found");
    }

    #[test]
    fn test_no_message_fields() {
        let body = json!({ "code": 500 });
        assert!(extract_message(&body).is_none());
    }

    #[test]
    fn test_non_string_message_ignored() {
        let body = json!({ "message": 42, "description": "fallback" });
        assert_eq!(extract_message(&body).unwrap(), "fallback");
    }
}
