//! API response types not tied to the chat models

use serde::Serialize;

/// Root liveness response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
    pub docs: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub documents: u64,
}

/// Error body, FastAPI-compatible for existing clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
