//! API request handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use tracing::error;
use tracing::info;

use crate::api::types::ErrorResponse;
use crate::api::types::HealthResponse;
use crate::api::types::RootResponse;
use crate::chat::ChatService;
use crate::errors::IngresError;
use crate::models::ChatRequest;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

/// Root endpoint (GET /) - liveness only
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "success".to_string(),
        message: "INGRES Chatbot API is running!".to_string(),
        docs: "POST /chat with {\"query\": \"...\"} to ask a question".to_string(),
    })
}

/// Health check (GET /health)
pub async fn health(State(state): State<AppState>) -> Response {
    if !state.chat.is_ready() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new("Vector store not initialized")),
        )
            .into_response();
    }

    match state.chat.document_count().await {
        Ok(documents) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                documents,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Health check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Main chat endpoint (POST /chat)
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    info!("POST /chat: {}", req.query);

    match state.chat.answer(&req.query, req.n_results).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Chat request failed: {e}");
            error_response(e)
        }
    }
}

/// Map the error taxonomy onto HTTP statuses.
///
/// Terminal provider rejections pass their status code and raw body through
/// unchanged; everything unexpected becomes a 500 with the error message as
/// detail.
fn error_response(err: IngresError) -> Response {
    let (status, detail) = match err {
        IngresError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        IngresError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        IngresError::GenerationRejected { status, body } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        ),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    };

    (status, Json(ErrorResponse::new(detail))).into_response()
}
