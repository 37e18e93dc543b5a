//! Error types for the API client.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the Notion API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("NOTION_API_TOKEN is not set. See .env.example.")]
    MissingCredential,

    #[error("Notion API error {status} ({code}): {message}")]
    Remote {
        status: u16,
        code: String,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Build a remote error from a non-success response.
    ///
    /// Uses the `code` and `message` of the API's error object when the body
    /// has one, otherwise the raw body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let code = parsed
            .as_ref()
            .and_then(|b| b.code.clone())
            .unwrap_or_else(|| "unknown".to_string());
        let message = parsed
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.trim().to_string());

        Self::Remote {
            status,
            code,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_object() {
        let body = r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find page."}"#;
        let err = ApiError::from_response(404, body);
        match &err {
            ApiError::Remote {
                status,
                code,
                message,
            } => {
                assert_eq!(*status, 404);
                assert_eq!(code, "object_not_found");
                assert_eq!(message, "Could not find page.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Notion API error 404 (object_not_found): Could not find page."
        );
    }

    #[test]
    fn test_from_plain_body() {
        let err = ApiError::from_response(502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "Notion API error 502 (unknown): Bad Gateway");
    }
}
