//! WebServer-specific error types
//!
//! Every handler error becomes an `{ "error": ... }` body with a 4xx/5xx status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{process_debug, process_error, ErrorResponse, ProcessId, SharedError};
use thiserror::Error;

pub const FILE_NOT_FOUND_MESSAGE: &str = "File not found. Please upload the CSV file again.";

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Invalid CSV: {details}")]
    InvalidCsv { details: String },

    #[error("{}", FILE_NOT_FOUND_MESSAGE)]
    FileNotFound { path: String },

    #[error("Categories required for categorical team generation")]
    CategoriesRequired,

    #[error("{details}")]
    InvalidRequest { details: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WebServerError {
    pub fn invalid_csv(details: impl Into<String>) -> Self {
        WebServerError::InvalidCsv { details: details.into() }
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        WebServerError::InvalidRequest { details: details.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            WebServerError::InvalidCsv { .. }
            | WebServerError::CategoriesRequired
            | WebServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            WebServerError::FileNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            process_error!(ProcessId::current(), "❌ Request failed: {}", self);
        } else {
            process_debug!(ProcessId::current(), "🚫 Request rejected ({}): {}", status, self);
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(WebServerError::invalid_csv("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(WebServerError::CategoriesRequired.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            WebServerError::FileNotFound { path: "a".into() }.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebServerError::ServerStartup("bind failed".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_match_client_expectations() {
        assert_eq!(
            WebServerError::invalid_csv("file is empty").to_string(),
            "Invalid CSV: file is empty"
        );
        assert_eq!(
            WebServerError::FileNotFound { path: "gone.csv".into() }.to_string(),
            FILE_NOT_FOUND_MESSAGE
        );
    }
}
