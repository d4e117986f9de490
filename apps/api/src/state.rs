use std::sync::Arc;

use crate::config::Config;
use crate::jobs::scraper::JobScraper;
use crate::llm_client::Completion;
use crate::pipeline::embedder::Embedder;
use crate::store::MemoryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// LLM completion collaborator. Production: the Gemini client; tests: stubs.
    pub llm: Arc<dyn Completion>,
    /// Embedding layer for the extraction pipeline. Holds the primary model
    /// when it loaded at startup; otherwise runs on the hash fallback.
    pub embedder: Arc<Embedder>,
    /// Job board scraping collaborator.
    pub scraper: Arc<dyn JobScraper>,
    /// Process-lifetime store for skills and assessment results.
    pub store: Arc<MemoryStore>,
    pub config: Config,
}
