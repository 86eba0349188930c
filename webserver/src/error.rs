//! WebServer-specific error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::SharedError;
use std::path::PathBuf;
use thiserror::Error;

use crate::types::ErrorResponse;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("Storage read failed for {}: {source}", .path.display())]
    StorageRead { path: PathBuf, source: std::io::Error },

    #[error("Storage write failed for {}: {source}", .path.display())]
    StorageWrite { path: PathBuf, source: std::io::Error },

    #[error("Stored scores in {} are corrupt: {source}", .path.display())]
    CorruptStorage { path: PathBuf, source: serde_json::Error },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest {
            details: details.into(),
        }
    }

    /// HTTP status and client-facing message for this error
    ///
    /// Client errors carry a fixed message; server faults never expose detail.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            WebServerError::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "Invalid data"),
            WebServerError::SharedError(SharedError::InvalidScore { .. }) => {
                (StatusCode::BAD_REQUEST, "Invalid score")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            shared::app_error!(error = %self, "❌ Request failed");
        } else {
            shared::app_debug!(error = %self, "Rejected request");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        let invalid = WebServerError::invalid_request("missing field `score`");
        assert_eq!(invalid.status_and_message(), (StatusCode::BAD_REQUEST, "Invalid data"));

        let coercion: WebServerError = SharedError::InvalidScore {
            value: "abc".to_string(),
        }
        .into();
        assert_eq!(coercion.status_and_message(), (StatusCode::BAD_REQUEST, "Invalid score"));
    }

    #[test]
    fn test_storage_errors_hide_detail() {
        let error = WebServerError::StorageRead {
            path: PathBuf::from("/secret/highscores.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let (status, message) = error.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("secret"));
    }
}
