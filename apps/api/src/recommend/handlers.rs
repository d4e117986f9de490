//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::recommend::{generate_recommendations, RecommendationSet};
use crate::state::AppState;

/// Uploaded reports are capped at 1 MiB.
const MAX_REPORT_BYTES: usize = 1024 * 1024;

/// POST /api/upload
///
/// Accepts an HTML report file upload (`reportfile` field), analyzes its
/// performance score, and returns course recommendations.
pub async fn handle_course_recommendations(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RecommendationSet>, AppError> {
    let mut report: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("reportfile") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            report = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) =
        report.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    validate_report_file(&filename, bytes.len())?;

    let content = String::from_utf8_lossy(&bytes).to_string();
    debug!(
        filename = %filename,
        size = bytes.len(),
        "Generating course recommendations from report"
    );

    let recommendations = generate_recommendations(&content, state.llm.as_ref()).await?;
    Ok(Json(recommendations))
}

/// Ensures the uploaded file is non-empty, HTML, and within size limits.
fn validate_report_file(filename: &str, size: usize) -> Result<(), AppError> {
    if filename.is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }
    if !filename.to_ascii_lowercase().ends_with(".html") {
        return Err(AppError::Validation(
            "Only .html files are allowed".to_string(),
        ));
    }
    if size > MAX_REPORT_BYTES {
        return Err(AppError::Validation("File too large (max 1MB)".to_string()));
    }
    Ok(())
}
