//! SOC Triad Server
//!
//! Three-stage security-decision pipeline for AI-facing request gateways.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       SOC TRIAD                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │  Screener  │   │ Investigator │   │    Governor      │  │
//! │  │  (intent   │   │  (behavior   │   │  (fusion +       │  │
//! │  │  classify) │   │   scoring)   │   │   overrides)     │  │
//! │  └─────┬──────┘   └──────┬───────┘   └────────┬─────────┘  │
//! │        │                 └────────────────────┤            │
//! │        ▼                                      ▼            │
//! │  ┌────────────┐                      ┌────────────────┐    │
//! │  │ Local LLM  │                      │ ALLOW / VERIFY │    │
//! │  │ (Ollama)   │                      │ / BLOCK        │    │
//! │  └────────────┘                      └────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod logic;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::classify::ScreenerClient;
use logic::sanitize::Sanitizer;

pub use error::{ApiJson, AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soc_triad=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("SOC Triad server starting...");
    tracing::info!("Classifier: {} @ {}", config.llm_model, config.llm_base_url);

    // Construct process-wide collaborators once; handlers get them via state.
    let screener = Arc::new(
        ScreenerClient::new(&config).expect("Failed to build classifier client"),
    );

    let sanitizer = match Sanitizer::new() {
        Ok(s) => Some(Arc::new(s)),
        Err(e) => {
            tracing::error!("Redaction engine unavailable, text passes through: {}", e);
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        screener,
        sanitizer,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub screener: Arc<ScreenerClient>,
    /// None when the redaction engine failed to construct; sanitization is
    /// best-effort and degrades to passthrough.
    pub sanitizer: Option<Arc<Sanitizer>>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/screener", post(handlers::screener::screen))
        .route("/api/v1/investigator", post(handlers::investigator::investigate))
        .route("/api/v1/governor", post(handlers::governor::govern))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
