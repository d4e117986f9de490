//! Axum route handler for the assistant chat endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::chat::build_chat_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// POST /api/chat
///
/// Answers a user query with the platform context prepended. Keeps the
/// original envelope: a failure returns an apologetic body with status 500
/// rather than the standard error shape.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let prompt = build_chat_prompt(&request.message);

    match state.llm.complete(&prompt).await {
        Ok(response) => (
            StatusCode::OK,
            Json(json!({
                "response": response,
                "status": "success",
            })),
        ),
        Err(e) => {
            error!("Chat completion failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "response": "Sorry, I encountered an error. Please try again.",
                    "status": "error",
                    "error": e.to_string(),
                })),
            )
        }
    }
}
