//! Axum route handler for the resume auto-fill endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::resume::ResumeRecord;
use crate::pipeline::extractor::extract_resume_fields;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AutoFillResponse {
    pub success: bool,
    pub data: ResumeRecord,
}

/// POST /api/auto-fill-resume
///
/// Accepts a PDF resume upload (`resume` field), runs the retrieval-augmented
/// extraction pipeline, and returns the normalized record.
pub async fn handle_auto_fill_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AutoFillResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, bytes.to_vec()));
        }
    }

    let (filename, bytes) =
        upload.ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !filename.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(
            "Invalid file format: please upload a PDF file".to_string(),
        ));
    }

    let resume_text = extract_text(&filename, &bytes)?;
    if resume_text.is_empty() {
        return Err(AppError::Validation(
            "Empty PDF: could not extract text from the file".to_string(),
        ));
    }

    info!(
        filename = %filename,
        chars = resume_text.len(),
        "running resume extraction pipeline"
    );

    let record = extract_resume_fields(&resume_text, &state.embedder, state.llm.as_ref())
        .await
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    Ok(Json(AutoFillResponse {
        success: true,
        data: record,
    }))
}
