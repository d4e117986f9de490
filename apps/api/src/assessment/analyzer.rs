//! Grading and narrative report generation for submitted assessments.

use std::collections::HashMap;

use serde::Serialize;

use crate::assessment::prompts::REPORT_PROMPT_TEMPLATE;
use crate::assessment::questions::QuizQuestion;
use crate::errors::AppError;
use crate::llm_client::Completion;

#[derive(Debug, Clone, Serialize)]
pub struct GradedQuestion {
    pub question: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradedSubmission {
    pub results: Vec<GradedQuestion>,
    pub correct_count: usize,
    pub total: usize,
    /// Percentage in `[0, 100]`.
    pub accuracy: f64,
    /// 1-based indices of the questions answered incorrectly.
    pub incorrect_questions: Vec<usize>,
}

/// Grades `answers` (keyed by question index as a string) against `questions`.
/// An absent or mismatched answer counts as incorrect.
pub fn grade_submission(
    questions: &[QuizQuestion],
    answers: &HashMap<String, String>,
) -> Result<GradedSubmission, AppError> {
    if questions.is_empty() {
        return Err(AppError::Validation("No questions provided".to_string()));
    }

    let mut results = Vec::with_capacity(questions.len());
    let mut correct_count = 0;

    for (i, question) in questions.iter().enumerate() {
        let user_answer = answers.get(&i.to_string()).cloned();
        let is_correct = user_answer.as_deref() == Some(question.correct_answer.as_str());
        if is_correct {
            correct_count += 1;
        }
        results.push(GradedQuestion {
            question: question.question.clone(),
            user_answer,
            correct_answer: question.correct_answer.clone(),
            is_correct,
        });
    }

    let total = questions.len();
    let accuracy = (correct_count as f64 / total as f64) * 100.0;
    let incorrect_questions = results
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.is_correct)
        .map(|(i, _)| i + 1)
        .collect();

    Ok(GradedSubmission {
        results,
        correct_count,
        total,
        accuracy,
        incorrect_questions,
    })
}

/// Asks the LLM for a narrative report over a graded submission.
/// Returns the report as markdown text.
pub async fn write_report(
    skill: &str,
    graded: &GradedSubmission,
    llm: &dyn Completion,
) -> Result<String, AppError> {
    let incorrect = format!("{:?}", graded.incorrect_questions);
    let prompt = REPORT_PROMPT_TEMPLATE
        .replace("{skill}", skill)
        .replace("{total}", &graded.total.to_string())
        .replace("{correct}", &graded.correct_count.to_string())
        .replace("{accuracy}", &format!("{:.2}", graded.accuracy))
        .replace("{incorrect}", &incorrect);

    llm.complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Report generation failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_questions(correct: &[&str]) -> Vec<QuizQuestion> {
        correct
            .iter()
            .map(|answer| QuizQuestion {
                question: "Q".to_string(),
                options: vec![
                    "A. one".to_string(),
                    "B. two".to_string(),
                    "C. three".to_string(),
                    "D. four".to_string(),
                ],
                correct_answer: answer.to_string(),
            })
            .collect()
    }

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_all_correct_is_100_percent() {
        let questions = make_questions(&["A", "B"]);
        let graded =
            grade_submission(&questions, &answers(&[("0", "A"), ("1", "B")])).unwrap();
        assert_eq!(graded.correct_count, 2);
        assert_eq!(graded.accuracy, 100.0);
        assert!(graded.incorrect_questions.is_empty());
    }

    #[test]
    fn test_partial_accuracy_and_incorrect_indices() {
        let questions = make_questions(&["A", "B", "C", "D"]);
        let graded = grade_submission(
            &questions,
            &answers(&[("0", "A"), ("1", "C"), ("2", "C"), ("3", "A")]),
        )
        .unwrap();
        assert_eq!(graded.correct_count, 2);
        assert_eq!(graded.accuracy, 50.0);
        // 1-based, as shown to the user
        assert_eq!(graded.incorrect_questions, vec![2, 4]);
    }

    #[test]
    fn test_missing_answer_counts_as_incorrect() {
        let questions = make_questions(&["A", "B"]);
        let graded = grade_submission(&questions, &answers(&[("0", "A")])).unwrap();
        assert_eq!(graded.correct_count, 1);
        assert_eq!(graded.results[1].user_answer, None);
        assert!(!graded.results[1].is_correct);
    }

    #[test]
    fn test_empty_question_list_is_an_error() {
        let err = grade_submission(&[], &HashMap::new()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
