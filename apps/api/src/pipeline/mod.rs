// Retrieval-augmented resume extraction pipeline.
// Implements: chunking, embedding (primary + hash fallback), cosine retrieval,
// and LLM-backed structured extraction. All LLM calls go through llm_client.

pub mod chunker;
pub mod embedder;
pub mod extractor;
pub mod handlers;
pub mod prompts;
pub mod retriever;
