/*
[INPUT]:  Error sources (parameter validation, HTTP, API, serialization, auth, config)
[OUTPUT]: Structured error types with status and auth hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the Global Tagging client
#[derive(Error, Debug)]
pub enum GlobalTaggingError {
    /// One or more required operation parameters were absent
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    /// Authenticator could not be built or applied
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GlobalTaggingError {
    /// Check if the error came from parameter validation
    pub fn is_missing_parameters(&self) -> bool {
        matches!(self, GlobalTaggingError::MissingParameters(_))
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            GlobalTaggingError::Authentication { .. } => true,
            GlobalTaggingError::Api { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            GlobalTaggingError::Api { status, .. } => Some(*status),
            GlobalTaggingError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from a status code and the raw response body.
    ///
    /// The message is pulled from the usual IBM Cloud error shapes
    /// (`errors[0].message`, `error`, `message`, `errorMessage`) and falls
    /// back to the canonical reason phrase.
    pub fn api_error(status: StatusCode, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let message = parsed
            .as_ref()
            .and_then(extract_error_message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });

        GlobalTaggingError::Api {
            status: status.as_u16(),
            message,
            body: parsed,
        }
    }
}

fn extract_error_message(body: &Value) -> Option<String> {
    if let Some(message) = body
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("message"))
        .and_then(Value::as_str)
    {
        return Some(message.to_string());
    }

    ["error", "message", "errorMessage"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Result type alias for Global Tagging operations
pub type Result<T> = std::result::Result<T, GlobalTaggingError>;
