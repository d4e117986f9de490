//! Embedding layer for the retrieval pipeline.
//!
//! Primary strategy: a pretrained sentence-embedding model (fastembed
//! `all-MiniLM-L6-v2`, 384 dimensions), loaded once at startup and shared
//! across requests. Fallback strategy: a deterministic hash pseudo-embedding
//! that is always available. A retrieval uses exactly one strategy for the
//! query and every chunk — the two vector spaces must never mix.

use std::sync::{Arc, Mutex};

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use md5::{Digest, Md5};
use tracing::{info, warn};

/// Dimension of every embedding vector, both strategies.
pub const EMBEDDING_DIM: usize = 384;

/// Byte width of each hashed window in the fallback embedding.
const HASH_WINDOW: usize = 10;

/// A learned sentence encoder. May fail per call; the [`Embedder`] recovers by
/// substituting the fallback for the whole batch.
pub trait SentenceEncoder: Send + Sync {
    fn encode(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;
}

/// fastembed-backed encoder. The model is effectively immutable after load;
/// the mutex exists only because inference takes `&mut self`, and concurrent
/// requests queue at it.
pub struct MiniLmEncoder {
    model: Mutex<TextEmbedding>,
}

impl MiniLmEncoder {
    /// Downloads (first run) and loads the model. Blocking; call once at startup.
    pub fn load() -> anyhow::Result<Self> {
        info!("Loading sentence embedding model: all-MiniLM-L6-v2");
        let model = TextEmbedding::try_new(InitOptions::new(EmbeddingModel::AllMiniLML6V2))?;
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl SentenceEncoder for MiniLmEncoder {
    fn encode(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        let mut model = self
            .model
            .lock()
            .map_err(|_| anyhow::anyhow!("embedding model mutex poisoned"))?;
        model.embed(texts.to_vec(), None)
    }
}

/// Which embedding strategy produced a batch of vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Primary,
    Fallback,
}

/// Embeds queries and chunks, silently degrading to the hash fallback when the
/// primary model is absent or errors. Never fails.
pub struct Embedder {
    primary: Option<Arc<dyn SentenceEncoder>>,
}

impl Embedder {
    pub fn new(primary: Option<Arc<dyn SentenceEncoder>>) -> Self {
        Self { primary }
    }

    /// Embeds the query and all chunks with a single strategy, chosen once per
    /// call: the primary model if it is loaded and the whole batch succeeds,
    /// the fallback otherwise. Returns `(query_vector, chunk_vectors, strategy)`.
    pub fn embed_for_retrieval(
        &self,
        query: &str,
        chunks: &[String],
    ) -> (Vec<f32>, Vec<Vec<f32>>, Strategy) {
        if let Some(encoder) = &self.primary {
            let mut batch = Vec::with_capacity(chunks.len() + 1);
            batch.push(query.to_string());
            batch.extend_from_slice(chunks);

            match encoder.encode(&batch) {
                Ok(mut vectors) if vectors.len() == batch.len() => {
                    let query_vector = vectors.remove(0);
                    return (query_vector, vectors, Strategy::Primary);
                }
                Ok(vectors) => {
                    warn!(
                        expected = batch.len(),
                        got = vectors.len(),
                        "primary encoder returned a short batch, substituting fallback"
                    );
                }
                Err(e) => {
                    warn!("primary encoder failed, substituting fallback: {e}");
                }
            }
        }

        let query_vector = hash_embedding(query);
        let chunk_vectors = chunks.iter().map(|c| hash_embedding(c)).collect();
        (query_vector, chunk_vectors, Strategy::Fallback)
    }
}

/// Deterministic pseudo-embedding: hash each 10-byte window of the text with
/// MD5, map the first 8 hex digits to `[-1, 1]`, and pad or truncate the
/// resulting sequence to exactly [`EMBEDDING_DIM`] values.
pub fn hash_embedding(text: &str) -> Vec<f32> {
    let mut values: Vec<f32> = text
        .as_bytes()
        .chunks(HASH_WINDOW)
        .map(|window| {
            let digest = Md5::digest(window);
            let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
            ((prefix as f64 / u32::MAX as f64) * 2.0 - 1.0) as f32
        })
        .collect();
    values.resize(EMBEDDING_DIM, 0.0);
    values
}
