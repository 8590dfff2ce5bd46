//! Error handling module for the Question Aura client.
//!
//! Provides a single error type for transport, API, and local failures, plus the
//! message extraction used to turn any failure into inline text for a view.

use serde_json::Value;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFLICT: &str = "CONFLICT";
    pub const API_ERROR: &str = "API_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Last-resort text when neither the backend nor the caller has anything to say.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Result alias used throughout the client.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or(.body.as_str()))]
    Api {
        status: u16,
        /// `detail` field of the error envelope, when present.
        detail: Option<String>,
        /// Raw response body for debugging.
        body: String,
    },

    /// Input rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),

    /// Reading or writing the local session file failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A payload could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Build an API error from a status code and raw body, pulling out `detail`.
    pub fn from_response(status: u16, body: String) -> Self {
        let detail = extract_detail(&body);
        ClientError::Api {
            status,
            detail,
            body,
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Network(_) => codes::NETWORK_ERROR,
            ClientError::Api { status, .. } => match status {
                401 => codes::UNAUTHORIZED,
                403 => codes::FORBIDDEN,
                404 => codes::NOT_FOUND,
                409 => codes::CONFLICT,
                _ => codes::API_ERROR,
            },
            ClientError::Validation(_) => codes::VALIDATION_ERROR,
            ClientError::Storage(_) => codes::STORAGE_ERROR,
            ClientError::Decode(_) => codes::DECODE_ERROR,
            ClientError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Text to show the user for a failed action.
    ///
    /// API errors prefer the backend's `detail`, then `fallback`, then the raw
    /// message. Local errors carry their own user-facing text and prefer it.
    /// Whatever is left empty ends at [`GENERIC_MESSAGE`].
    pub fn user_message(&self, fallback: &str) -> String {
        let candidates: [Option<String>; 2] = match self {
            ClientError::Api { detail, .. } => [detail.clone(), Some(fallback.to_string())],
            _ => [Some(self.message()), Some(fallback.to_string())],
        };

        candidates
            .into_iter()
            .flatten()
            .chain(std::iter::once(self.message()))
            .find(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_MESSAGE.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ClientError::Decode(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {:?}", err);
        ClientError::Storage(err.to_string())
    }
}

/// Pull the human-readable `detail` out of an error envelope.
///
/// Handles plain `{"detail": "..."}` as well as validation envelopes where
/// `detail` is a list of `{"msg": "..."}` objects.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_extracted_from_envelope() {
        let err = ClientError::from_response(404, r#"{"detail":"Question not found"}"#.into());
        assert_eq!(err.error_code(), codes::NOT_FOUND);
        assert_eq!(err.user_message("Failed to load"), "Question not found");
    }

    #[test]
    fn test_validation_list_detail() {
        let body = r#"{"detail":[{"loc":["body","ask"],"msg":"field required"}]}"#;
        let err = ClientError::from_response(422, body.into());
        assert_eq!(err.user_message("Failed"), "field required");
    }

    #[test]
    fn test_api_error_without_detail_uses_fallback() {
        let err = ClientError::from_response(500, "Internal Server Error".into());
        assert_eq!(
            err.user_message("Failed to create question"),
            "Failed to create question"
        );
    }

    #[test]
    fn test_api_error_without_fallback_uses_raw_message() {
        let err = ClientError::from_response(502, "bad gateway".into());
        assert_eq!(err.user_message(""), "API error (502): bad gateway");
    }

    #[test]
    fn test_local_error_keeps_its_own_text() {
        let err = ClientError::Validation("No file selected".into());
        assert_eq!(err.user_message("Upload failed"), "No file selected");
        assert_eq!(err.error_code(), codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_empty_everything_falls_back_to_generic() {
        let err = ClientError::Validation(String::new());
        assert_eq!(err.user_message("  "), GENERIC_MESSAGE);
    }

    #[test]
    fn test_conflict_code() {
        let err =
            ClientError::from_response(409, r#"{"detail":"Email is already registered"}"#.into());
        assert_eq!(err.error_code(), codes::CONFLICT);
        assert_eq!(err.status(), Some(409));
    }
}
