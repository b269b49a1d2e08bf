pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::chat::handlers::handle_chat;
use crate::roadmap::handlers::handle_generate_roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume/analyze",
            post(handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/roadmap/generate", post(handle_generate_roadmap))
        .route("/api/v1/chat", post(handle_chat))
        .with_state(state)
}
