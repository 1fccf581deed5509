//! Application error types and handling.
//!
//! Every handler returns `AppResult`; this module is the single place where
//! failures become HTTP responses and get logged.

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use serde::Serialize;
use std::path::Path;

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable error code.
    pub code: &'static str,
}

/// Application error types.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested file does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request (empty filename, path traversal).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body failed schema validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A configured folder is missing at request time.
    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get the error code string.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::FolderNotFound(_) => "FOLDER_NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Create a not found error for an audio file.
    pub fn audio_not_found(filename: &str) -> Self {
        Self::NotFound(format!("Audio file not found: {}", filename))
    }

    /// Create a not found error for a lyrics file.
    pub fn lyrics_not_found(filename: &str) -> Self {
        Self::NotFound(format!("Lyrics file not found: {}", filename))
    }

    /// Create an error for a missing configured folder.
    pub fn folder_not_found(path: &Path) -> Self {
        Self::FolderNotFound(path.display().to_string())
    }

    /// Create a bad request error for a path traversal attempt.
    pub fn path_traversal() -> Self {
        Self::BadRequest("Invalid path: path traversal not allowed".to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::FolderNotFound(_) | Self::Internal(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        };

        tracing::error!(
            error_code = %self.error_code(),
            status = %status.as_u16(),
            message = %self.to_string(),
            "API error"
        );

        HttpResponse::build(status).json(body)
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

/// JSON extractor configuration routing body errors through [`AppError`],
/// so a missing `filename` or `lyrics` field gets the same response shape
/// as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NotFound("test".into()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::Validation("test".into()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::path_traversal().error_code(), "BAD_REQUEST");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::folder_not_found(Path::new("/missing")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_folder_error_includes_path() {
        let err = AppError::folder_not_found(Path::new("/data/audio"));
        assert!(err.to_string().contains("/data/audio"));
    }

    #[test]
    fn test_error_response_serialization() {
        let body = ErrorResponse {
            error: "Audio file not found: x.mp3".to_string(),
            code: "NOT_FOUND",
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"error\""));
        assert!(json.contains("NOT_FOUND"));
    }
}
