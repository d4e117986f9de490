mod assessment;
mod ats;
mod chat;
mod config;
mod errors;
mod extract;
mod jobs;
mod llm_client;
mod matching;
mod models;
mod pipeline;
mod recommend;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::scraper::TimesJobsScraper;
use crate::llm_client::LlmClient;
use crate::pipeline::embedder::{Embedder, MiniLmEncoder, SentenceEncoder};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sahay API v{}", env!("CARGO_PKG_VERSION"));

    // Reports directory for saved assessment reports
    std::fs::create_dir_all(&config.reports_dir)?;

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Load the sentence embedding model once; on failure the pipeline runs on
    // the deterministic hash fallback instead of refusing to start.
    let primary: Option<Arc<dyn SentenceEncoder>> =
        match tokio::task::spawn_blocking(MiniLmEncoder::load).await? {
            Ok(encoder) => {
                info!("Embedding model loaded");
                Some(Arc::new(encoder))
            }
            Err(e) => {
                warn!("Error initializing embedding model: {e}");
                info!("Falling back to hash-based embeddings");
                None
            }
        };
    let embedder = Arc::new(Embedder::new(primary));

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        embedder,
        scraper: Arc::new(TimesJobsScraper::new()),
        store: Arc::new(MemoryStore::new()),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
