use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Invalid JSON from {url} (HTTP {status}): {message}")]
    InvalidJson {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Invalid version key: {0}")]
    InvalidVersionKey(String),

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Wrap a filesystem error together with the path it happened on
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        AppError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// True for errors caused by a document that could not be understood,
    /// as opposed to failing to retrieve it
    pub fn is_malformed_document(&self) -> bool {
        matches!(
            self,
            AppError::SerializationError(_)
                | AppError::InvalidDocument(_)
                | AppError::InvalidJson { .. }
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            AppError::ExternalServiceError(format!("HTTP {}: {}", status, err))
        } else {
            AppError::ExternalServiceError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
