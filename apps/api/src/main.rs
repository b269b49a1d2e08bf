mod analysis;
mod chat;
mod config;
mod document;
mod errors;
mod lexicon;
mod roadmap;
mod routes;
mod session;
mod state;
mod upstream;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::chat::engine::ConversationEngine;
use crate::config::Config;
use crate::document::PdfDocumentReader;
use crate::routes::build_router;
use crate::session::{InMemorySessionStore, SessionStore};
use crate::state::AppState;
use crate::upstream::probe_upstream;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // One-shot liveness probe; the service runs either way
    let upstream_available = probe_upstream(
        config.huggingface_api_key.clone(),
        config.upstream_timeout,
        &config.upstream_url,
    )
    .await;

    // Session store shared by the analysis and chat paths
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let analyzer = Analyzer::new(Arc::new(PdfDocumentReader), store.clone());
    let engine = ConversationEngine::new(store.clone());
    info!(
        "Session store ready (in-memory); upload limit {} bytes",
        config.max_upload_bytes
    );

    let state = AppState {
        config: config.clone(),
        store,
        analyzer,
        engine,
        upstream_available,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
