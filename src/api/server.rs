//! HTTP server implementation

use std::sync::Arc;

use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::chat::ChatService;
use crate::chat::ServiceState;
use crate::config::AppConfig;
use crate::llm::GeminiClient;
use crate::vector_store::ChromaStore;
use crate::vector_store::VectorStore;
use crate::Result;

/// Start the API server
pub async fn serve(config: &AppConfig, host: String, port: u16, enable_cors: bool) -> Result<()> {
    info!("🚀 Starting INGRES Chatbot API...");

    let state = AppState {
        chat: Arc::new(ChatService::new(init_services(config).await)),
    };

    let mut app = routes::api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        info!("✅ CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{addr}");
    info!("");
    info!("Available endpoints:");
    info!("  GET  /        - Liveness");
    info!("  GET  /health  - Health check");
    info!("  POST /chat    - Chat query");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the service state from configuration.
///
/// A missing credential or an unreachable vector store leaves the service in
/// a degraded not-ready state rather than aborting startup; the endpoints
/// report 503 on their own.
async fn init_services(config: &AppConfig) -> ServiceState {
    let Some(api_key) = config.api_key() else {
        error!("❌ GEMINI_API_KEY not found; service will stay unavailable");
        return ServiceState::not_ready();
    };
    info!("✅ API key loaded");

    let generator = match GeminiClient::new(
        config.llm_endpoint().to_string(),
        config.llm_model().to_string(),
        api_key,
    ) {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Failed to build generation client: {e}");
            return ServiceState::not_ready();
        }
    };

    let store = match ChromaStore::connect(
        config.vector_store_endpoint(),
        config.vector_store_collection(),
    )
    .await
    {
        Ok(store) => store,
        Err(e) => {
            error!("❌ Startup error: {e}");
            return ServiceState::not_ready();
        }
    };

    match store.count().await {
        Ok(documents) => {
            info!("✅ Vector store loaded ({documents} documents)");
            ServiceState::ready(Arc::new(store), Arc::new(generator))
        }
        Err(e) => {
            error!("❌ Startup error: {e}");
            ServiceState::not_ready()
        }
    }
}
