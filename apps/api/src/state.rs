use std::sync::Arc;

use crate::config::Config;
use crate::insights::generator::InsightGenerator;
use crate::store::CareerStore;
use crate::view_cache::ViewCache;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every handle is built once at startup; handlers hold no other state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CareerStore>,
    /// Model-backed by default (`LlmInsightGenerator`).
    pub generator: Arc<dyn InsightGenerator>,
    pub view_cache: Arc<dyn ViewCache>,
    pub config: Config,
}
