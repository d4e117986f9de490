pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{assessment, ats, chat, jobs, matching, pipeline, recommend};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assistant chat
        .route("/api/chat", post(chat::handlers::handle_chat))
        // Assessment
        .route("/api/skills", get(assessment::handlers::handle_get_skills))
        .route("/api/assess", post(assessment::handlers::handle_assessment))
        .route(
            "/download/:filename",
            get(assessment::handlers::handle_download_report),
        )
        // Resume auto-fill (retrieval-augmented extraction)
        .route(
            "/api/auto-fill-resume",
            post(pipeline::handlers::handle_auto_fill_resume),
        )
        // Course recommendations
        .route(
            "/api/upload",
            post(recommend::handlers::handle_course_recommendations),
        )
        // Jobs
        .route("/api/jobs/search", post(jobs::handlers::handle_job_search))
        .route(
            "/api/jobs/suggestions",
            post(jobs::handlers::handle_job_suggestions),
        )
        .route(
            "/api/match-jobs",
            post(matching::handlers::handle_match_jobs),
        )
        // ATS evaluation
        .route("/api/ats-check", post(ats::handlers::handle_ats_check))
        .with_state(state)
}
