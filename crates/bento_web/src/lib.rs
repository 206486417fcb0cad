use axum::{
    routing::{get, post},
    Router,
};
use bento_core::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod state;

pub use error::ApiError;
pub use pipeline::Pipeline;
pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/process", post(handlers::process))
        .route("/api/save-data", post(handlers::save_data))
        .route("/api/get-data", get(handlers::get_data))
        .route("/api/health", get(handlers::health))
        .route("/api/sources", get(handlers::list_sources))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Binds `addr` and serves until ctrl-c.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = create_app(state).await;
    let listener = TcpListener::bind(addr).await?;
    info!("🍱 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("⚠️ Could not listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("👋 Shutting down");
}

pub mod prelude {
    pub use bento_core::{BentoResult, Error, RawInput, Result};
    pub use crate::{create_app, serve, ApiError, AppState, Pipeline};
}
