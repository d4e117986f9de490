//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::matching::{match_jobs, ResumeDoc};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchJobsRequest {
    #[serde(default)]
    pub jobs: Vec<Value>,
    #[serde(default)]
    pub resumes: Vec<ResumeDoc>,
}

/// POST /api/match-jobs
///
/// Annotates every submitted job with its best-matching resume by TF-IDF
/// cosine similarity. Pure computation — no LLM call, no network.
pub async fn handle_match_jobs(
    State(_state): State<AppState>,
    Json(request): Json<MatchJobsRequest>,
) -> Result<Json<Vec<Value>>, AppError> {
    Ok(Json(match_jobs(request.jobs, &request.resumes)))
}
