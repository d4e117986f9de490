//! Extraction orchestrator — drives chunk → embed → retrieve → LLM → validate.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::{strip_json_fences, Completion};
use crate::models::resume::ResumeRecord;
use crate::pipeline::chunker::split_into_chunks;
use crate::pipeline::embedder::Embedder;
use crate::pipeline::prompts::RESUME_EXTRACT_PROMPT_TEMPLATE;
use crate::pipeline::retriever::retrieve_top_k;

/// Default chunking window, in words.
pub const CHUNK_SIZE: usize = 500;
/// Default chunk overlap, in words.
pub const CHUNK_OVERLAP: usize = 50;
/// Number of chunks handed to the LLM as context.
pub const RETRIEVAL_K: usize = 5;

/// Fixed query describing the extraction intent; the retrieved chunks are the
/// ones most similar to this.
const EXTRACTION_QUERY: &str = "Extract resume details for auto-fill";

const REQUIRED_KEYS: [&str; 5] = [
    "personal_information",
    "education",
    "technical_skills",
    "soft_skills",
    "languages",
];

/// Whole-extraction failure. The pipeline never returns a partial record: an
/// LLM failure, unparseable output, or missing top-level key fails the call
/// with a human-readable cause.
#[derive(Debug, Error)]
#[error("resume extraction failed: {0}")]
pub struct ExtractionFailed(pub String);

/// Runs the full retrieval-augmented extraction over `document_text`.
///
/// Embedding-layer failures never surface here — the embedder silently
/// substitutes its deterministic fallback. Everything after the retrieval is
/// strict: the LLM response must parse as JSON and carry all top-level keys.
pub async fn extract_resume_fields(
    document_text: &str,
    embedder: &Embedder,
    llm: &dyn Completion,
) -> Result<ResumeRecord, ExtractionFailed> {
    let chunks = split_into_chunks(document_text, CHUNK_SIZE, CHUNK_OVERLAP)
        .map_err(|e| ExtractionFailed(format!("chunking failed: {e}")))?;

    let (query_vector, chunk_vectors, strategy) =
        embedder.embed_for_retrieval(EXTRACTION_QUERY, &chunks);
    debug!(
        chunk_count = chunks.len(),
        ?strategy,
        "embedded resume chunks for retrieval"
    );

    let relevant = retrieve_top_k(&query_vector, &chunk_vectors, &chunks, RETRIEVAL_K);
    let context = relevant.join("\n\n");

    let prompt = RESUME_EXTRACT_PROMPT_TEMPLATE.replace("{context}", &context);
    let raw = llm
        .complete(&prompt)
        .await
        .map_err(|e| ExtractionFailed(format!("LLM call failed: {e}")))?;

    parse_extraction_response(&raw)
}

/// Strips code fences, parses the response as JSON, and validates the schema's
/// top-level keys before deserializing into a typed record.
fn parse_extraction_response(raw: &str) -> Result<ResumeRecord, ExtractionFailed> {
    let stripped = strip_json_fences(raw);

    let value: Value = serde_json::from_str(stripped)
        .map_err(|e| ExtractionFailed(format!("LLM response is not valid JSON: {e}")))?;

    for key in REQUIRED_KEYS {
        if value.get(key).is_none() {
            return Err(ExtractionFailed(format!(
                "LLM response is missing required field '{key}'"
            )));
        }
    }

    serde_json::from_value(value)
        .map_err(|e| ExtractionFailed(format!("LLM response does not match the schema: {e}")))
}
