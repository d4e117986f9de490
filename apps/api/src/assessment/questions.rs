//! Quiz generation — asks the LLM for a fixed-shape question set and refuses
//! anything structurally off.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::assessment::prompts::QUIZ_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::{extract_json_object, Completion};

/// Number of questions every generated quiz must contain.
pub const QUESTION_COUNT: usize = 12;
/// Options per question, labeled A–D.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<QuizQuestion>,
}

/// Structural validation of a generated question set: exactly 12 questions,
/// 4 options each, and a correct answer letter that matches one option label.
pub fn validate_question_set(set: &QuestionSet) -> bool {
    if set.questions.len() != QUESTION_COUNT {
        return false;
    }
    set.questions.iter().all(|q| {
        !q.question.trim().is_empty()
            && q.options.len() == OPTION_COUNT
            && q.options
                .iter()
                .any(|opt| opt.starts_with(q.correct_answer.as_str()))
    })
}

/// Generates a validated question set for `skill` via the LLM.
pub async fn generate_questions(
    skill: &str,
    llm: &dyn Completion,
) -> Result<QuestionSet, AppError> {
    let prompt = QUIZ_PROMPT_TEMPLATE.replace("{skill}", skill);

    let raw = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Quiz generation failed: {e}")))?;

    let json_str = extract_json_object(&raw).ok_or_else(|| {
        error!("Quiz response contained no JSON object: {raw:.200}");
        AppError::Llm("Quiz response contained no JSON object".to_string())
    })?;

    let set: QuestionSet = serde_json::from_str(json_str)
        .map_err(|e| AppError::Llm(format!("Quiz response did not parse: {e}")))?;

    if !validate_question_set(&set) {
        return Err(AppError::UnprocessableEntity(
            "Generated questions failed validation".to_string(),
        ));
    }

    Ok(set)
}
