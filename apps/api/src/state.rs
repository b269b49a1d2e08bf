use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::chat::engine::ConversationEngine;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable session backend. Default: InMemorySessionStore.
    pub store: Arc<dyn SessionStore>,
    pub analyzer: Analyzer,
    pub engine: ConversationEngine,
    /// Result of the startup liveness probe; informational only.
    pub upstream_available: bool,
}
