//! Axum route handlers for the ATS evaluation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::ats::{evaluate_resume, AtsEvaluation};
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::state::AppState;

/// POST /api/ats-check
///
/// Accepts a resume upload (`resume` field, PDF or TXT), extracts its text,
/// and returns the LLM's scored evaluation.
pub async fn handle_ats_check(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AtsEvaluation>, AppError> {
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

    let resume_text = extract_text(&filename, &bytes)?;
    if resume_text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract text from the file".to_string(),
        ));
    }

    info!(
        filename = %filename,
        chars = resume_text.len(),
        "evaluating resume"
    );

    let evaluation = evaluate_resume(&resume_text, state.llm.as_ref()).await?;
    Ok(Json(evaluation))
}
