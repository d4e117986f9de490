// Course recommendations from an uploaded performance report.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod prompts;

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::{parse_json_response, Completion};
use crate::recommend::prompts::RECOMMEND_PROMPT_TEMPLATE;

/// One recommended course, as the LLM returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRecommendation {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Full recommendation payload. The three top-level keys are intentionally
/// non-defaulted: a response missing any of them is rejected as malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommended: Vec<TopicRecommendation>,
    pub trending: Vec<TopicRecommendation>,
    pub new: Vec<TopicRecommendation>,
}

/// Pulls the overall performance percentage out of a report document.
/// Absent or malformed scores degrade to 0.0 with a warning.
pub fn parse_performance(content: &str) -> f64 {
    static SCORE: OnceLock<Regex> = OnceLock::new();
    let re = SCORE.get_or_init(|| {
        Regex::new(r"(?i)Overall performance\s*:\s*([\d.]+)%").expect("valid regex")
    });

    match re.captures(content).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().parse::<f64>().unwrap_or_else(|_| {
            warn!("Invalid performance score format: {}", m.as_str());
            0.0
        }),
        None => {
            warn!("No performance score found in report");
            0.0
        }
    }
}

/// Generates course recommendations for a report via the LLM.
pub async fn generate_recommendations(
    content: &str,
    llm: &dyn Completion,
) -> Result<RecommendationSet, AppError> {
    let performance = parse_performance(content);
    let prompt = RECOMMEND_PROMPT_TEMPLATE
        .replace("{content}", content)
        .replace("{performance}", &format!("{performance}"));

    let raw = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate recommendations: {e}")))?;

    parse_json_response(&raw)
        .map_err(|e| AppError::Llm(format!("Invalid recommendations format: {e}")))
}
