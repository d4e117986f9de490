//! Axum route handlers for the Assessment API.

use std::collections::HashMap;
use std::path::Path as FsPath;
use std::sync::OnceLock;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::assessment::analyzer::{grade_submission, write_report};
use crate::assessment::questions::{generate_questions, QuizQuestion};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of POST /api/assess. `action` selects the operation; the remaining
/// fields are required per action and validated by the handler.
#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub action: String,
    pub skill: Option<String>,
    pub questions: Option<Vec<QuizQuestion>>,
    pub answers: Option<HashMap<String, String>>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub status: String,
    pub technical: Vec<String>,
    pub languages: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/skills
///
/// Returns the stored skill profile used to seed assessments.
pub async fn handle_get_skills(
    State(state): State<AppState>,
) -> Result<Json<SkillsResponse>, AppError> {
    let skills = state.store.skills();
    if skills.technical.is_empty() && skills.languages.is_empty() {
        return Err(AppError::NotFound(
            "No skills found for student".to_string(),
        ));
    }
    Ok(Json(SkillsResponse {
        status: "success".to_string(),
        technical: skills.technical,
        languages: skills.languages,
    }))
}

/// POST /api/assess
///
/// `action = "start"`: generate a quiz for a skill.
/// `action = "submit"`: grade answers, write the narrative report, store the
/// result, and return the report with a download URL.
pub async fn handle_assessment(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<Value>, AppError> {
    match request.action.as_str() {
        "start" => {
            let skill = request
                .skill
                .filter(|s| !s.trim().is_empty())
                .ok_or_else(|| AppError::Validation("Missing skill".to_string()))?;

            let set = generate_questions(&skill, state.llm.as_ref()).await?;
            Ok(Json(json!({
                "status": "success",
                "questions": set.questions,
            })))
        }
        "submit" => {
            let mut missing = Vec::new();
            if request.questions.is_none() {
                missing.push("questions");
            }
            if request.answers.is_none() {
                missing.push("answers");
            }
            if request.skill.is_none() {
                missing.push("skill");
            }
            if !missing.is_empty() {
                return Err(AppError::Validation(format!(
                    "Missing required data: {}",
                    missing.join(", ")
                )));
            }

            let skill = request.skill.unwrap_or_default();
            let questions = request.questions.unwrap_or_default();
            let answers = request.answers.unwrap_or_default();

            info!(
                skill = %skill,
                question_count = questions.len(),
                answer_count = answers.len(),
                "Processing assessment submission"
            );

            let graded = grade_submission(&questions, &answers)?;
            let report = write_report(&skill, &graded, state.llm.as_ref()).await?;

            let download_url = save_report(&state.config.reports_dir, &skill, &report);

            state
                .store
                .save_result(skill, graded.accuracy, report.clone(), questions, answers);

            Ok(Json(json!({
                "status": "success",
                "report": report,
                "accuracy": graded.accuracy,
                "download_url": download_url,
            })))
        }
        _ => Err(AppError::Validation("Invalid action".to_string())),
    }
}

/// GET /download/:filename
///
/// Serves a previously saved assessment report as an attachment.
pub async fn handle_download_report(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // a stored report name never contains a path separator
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(AppError::Validation("Invalid report filename".to_string()));
    }

    let path = FsPath::new(&state.config.reports_dir).join(&filename);
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("Report {filename} not found")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        contents,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Report persistence
// ────────────────────────────────────────────────────────────────────────────

/// Writes the report under the reports directory, returning its download URL.
/// A write failure degrades to `None`; the submission itself still succeeds.
fn save_report(reports_dir: &str, skill: &str, report: &str) -> Option<String> {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    let filename = format!("{}_{timestamp}_report.md", sanitize_skill(skill));
    let path = FsPath::new(reports_dir).join(&filename);

    match std::fs::write(&path, report) {
        Ok(()) => {
            info!("Report saved to {}", path.display());
            Some(format!("/download/{filename}"))
        }
        Err(e) => {
            warn!("Error saving report: {e}");
            None
        }
    }
}

/// Collapses every non-word run in the skill name to a single underscore.
fn sanitize_skill(skill: &str) -> String {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    let re = NON_WORD.get_or_init(|| Regex::new(r"\W+").expect("valid regex"));
    re.replace_all(skill, "_").into_owned()
}
