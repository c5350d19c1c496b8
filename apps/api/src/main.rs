mod auth;
mod config;
mod db;
mod errors;
mod insights;
mod llm_client;
mod models;
mod profile;
mod routes;
mod state;
mod store;
mod testimonials;
mod view_cache;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::insights::generator::LlmInsightGenerator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgCareerStore;
use crate::view_cache::RedisViewCache;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting career insights API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize Redis (view-cache invalidation)
    let redis = redis::Client::open(config.redis_url.clone())?;
    info!(
        "Redis client initialized (invalidation channel: {})",
        config.view_cache_channel
    );

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    info!(
        "Profile updates time out after {}s",
        config.profile_tx_timeout.as_secs()
    );

    // Build app state
    let state = AppState {
        store: Arc::new(PgCareerStore::new(db)),
        generator: Arc::new(LlmInsightGenerator::new(llm)),
        view_cache: Arc::new(RedisViewCache::new(
            redis,
            config.view_cache_channel.clone(),
        )),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict CORS to the web app's origin once it is configurable
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
