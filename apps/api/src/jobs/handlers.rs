//! Axum route handlers for the Jobs API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::{clean_and_deduplicate, JobPosting};
use crate::matching::improvement_suggestions;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub job_description: String,
    #[serde(default)]
    pub resume_text: String,
}

/// POST /api/jobs/search
///
/// Scrapes the job board for the keyword/location, cleans and deduplicates
/// the rows, and returns them in the fixed job shape. No results is a 404.
pub async fn handle_job_search(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let scraped = state
        .scraper
        .scrape(&request.keyword, &request.location)
        .await?;

    let cleaned = clean_and_deduplicate(scraped, &request.keyword);
    if cleaned.is_empty() {
        return Err(AppError::NotFound("No jobs found".to_string()));
    }

    info!(
        keyword = %request.keyword,
        location = %request.location,
        count = cleaned.len(),
        "job search completed"
    );

    Ok(Json(cleaned.into_iter().map(JobPosting::from).collect()))
}

/// POST /api/jobs/suggestions
///
/// Returns three LLM-written suggestions to improve a resume's match against
/// a job description.
pub async fn handle_job_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let suggestions = improvement_suggestions(
        &request.job_description,
        &request.resume_text,
        state.llm.as_ref(),
    )
    .await;

    Ok(Json(serde_json::json!({ "suggestions": suggestions })))
}
