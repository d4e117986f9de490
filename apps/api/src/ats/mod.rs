// ATS-style resume evaluation: one LLM call, strictly typed JSON out.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod prompts;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ats::prompts::ATS_EVALUATION_PROMPT;
use crate::errors::AppError;
use crate::llm_client::{parse_json_response, Completion};

/// Per-category scores out of 100.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(default)]
    pub format: u32,
    #[serde(default)]
    pub content: u32,
    #[serde(default)]
    pub relevance: u32,
    #[serde(default)]
    pub clarity: u32,
    #[serde(default)]
    pub impact_statements: u32,
    #[serde(default)]
    pub skills_presentation: u32,
}

/// Full evaluation result for one resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsEvaluation {
    pub overall_score: u32,
    pub category_scores: CategoryScores,
    #[serde(default)]
    pub feedback: HashMap<String, String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Scores a resume with the LLM and returns the typed evaluation.
pub async fn evaluate_resume(
    resume_text: &str,
    llm: &dyn Completion,
) -> Result<AtsEvaluation, AppError> {
    let prompt = format!("{ATS_EVALUATION_PROMPT}\n{resume_text}");

    let raw = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume evaluation failed: {e}")))?;

    parse_json_response(&raw)
        .map_err(|e| AppError::Llm(format!("Evaluation response did not parse: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_deserializes_from_llm_shape() {
        let json = r#"{
            "overall_score": 85,
            "category_scores": {
                "format": 80,
                "content": 85,
                "relevance": 90,
                "clarity": 75,
                "impact_statements": 70,
                "skills_presentation": 85
            },
            "feedback": {"format": "Tighten the layout."},
            "recommendations": ["Quantify achievements"]
        }"#;
        let evaluation: AtsEvaluation = serde_json::from_str(json).unwrap();
        assert_eq!(evaluation.overall_score, 85);
        assert_eq!(evaluation.category_scores.relevance, 90);
        assert_eq!(evaluation.recommendations.len(), 1);
    }

    #[test]
    fn test_missing_overall_score_is_rejected() {
        let json = r#"{"category_scores": {}}"#;
        assert!(serde_json::from_str::<AtsEvaluation>(json).is_err());
    }

    #[test]
    fn test_prompt_names_every_category() {
        for category in [
            "format",
            "content",
            "relevance",
            "clarity",
            "impact_statements",
            "skills_presentation",
        ] {
            assert!(ATS_EVALUATION_PROMPT.contains(category), "{category}");
        }
    }
}
