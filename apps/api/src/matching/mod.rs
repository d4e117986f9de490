// Job ↔ resume matching: TF-IDF cosine similarity plus LLM-backed
// improvement suggestions. The similarity path is pure Rust — fast,
// deterministic, no LLM call.

pub mod handlers;
pub mod tfidf;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::llm_client::Completion;
use crate::matching::tfidf::best_match;

/// A candidate resume as submitted for matching.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeDoc {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// Annotates each job object with `match_percentage` and `best_resume`,
/// chosen by TF-IDF cosine similarity between the job description and every
/// resume text. Jobs are passed through otherwise untouched.
pub fn match_jobs(jobs: Vec<Value>, resumes: &[ResumeDoc]) -> Vec<Value> {
    let resume_texts: Vec<String> = resumes
        .iter()
        .map(|r| {
            let trimmed = r.text.trim();
            if trimmed.is_empty() {
                // keep the document list index-aligned with `resumes`
                " ".to_string()
            } else {
                trimmed.to_string()
            }
        })
        .collect();

    jobs.into_iter()
        .map(|mut job| {
            let description = job
                .get("description")
                .and_then(|d| d.as_str())
                .unwrap_or_default()
                .trim()
                .to_string();

            let (percentage, best) = match best_match(&description, &resume_texts) {
                Some((index, similarity)) if !resumes.is_empty() => {
                    let resume = &resumes[index];
                    (
                        round2(similarity * 100.0),
                        json!({ "id": resume.id, "name": resume.name }),
                    )
                }
                _ => (0.0, Value::Null),
            };

            if let Some(object) = job.as_object_mut() {
                object.insert("match_percentage".to_string(), json!(percentage));
                object.insert("best_resume".to_string(), best);
            }
            job
        })
        .collect()
}

/// Asks the LLM for three concrete suggestions to improve the match between a
/// resume and a job description. Degrades to a fixed message on failure
/// instead of failing the request.
pub async fn improvement_suggestions(
    job_description: &str,
    resume_text: &str,
    llm: &dyn Completion,
) -> String {
    if resume_text.trim().is_empty() {
        return "No resume text provided.".to_string();
    }

    let prompt = format!(
        "Job Description:\n{job_description}\n\n\
         Resume Text:\n{resume_text}\n\n\
         Provide three concrete suggestions to improve the match between the resume and the job description."
    );

    match llm.complete(&prompt).await {
        Ok(suggestions) => suggestions.trim().to_string(),
        Err(e) => {
            warn!("Error generating suggestions: {e}");
            "Error generating suggestions.".to_string()
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(id: u64, name: &str, text: &str) -> ResumeDoc {
        ResumeDoc {
            id: json!(id),
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_match_jobs_picks_most_similar_resume() {
        let jobs = vec![json!({
            "title": "Backend Engineer",
            "description": "rust backend engineer building distributed systems"
        })];
        let resumes = vec![
            resume(1, "Ann", "experienced rust engineer, distributed systems background"),
            resume(2, "Bob", "graphic designer focused on branding and typography"),
        ];

        let matched = match_jobs(jobs, &resumes);
        assert_eq!(matched[0]["best_resume"]["id"], json!(1));
        assert_eq!(matched[0]["best_resume"]["name"], "Ann");
        assert!(matched[0]["match_percentage"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_match_jobs_without_resumes_is_zero() {
        let jobs = vec![json!({"description": "any role"})];
        let matched = match_jobs(jobs, &[]);
        assert_eq!(matched[0]["match_percentage"], json!(0.0));
        assert_eq!(matched[0]["best_resume"], Value::Null);
    }

    #[test]
    fn test_match_jobs_preserves_existing_job_fields() {
        let jobs = vec![json!({"title": "QA", "description": "testing role", "url": "#"})];
        let resumes = vec![resume(9, "Eve", "qa testing experience")];

        let matched = match_jobs(jobs, &resumes);
        assert_eq!(matched[0]["title"], "QA");
        assert_eq!(matched[0]["url"], "#");
    }

    #[test]
    fn test_match_percentage_rounded_to_two_decimals() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
    }

    #[tokio::test]
    async fn test_suggestions_short_circuit_on_empty_resume() {
        struct NeverCalled;
        #[async_trait::async_trait]
        impl Completion for NeverCalled {
            async fn complete(
                &self,
                _prompt: &str,
            ) -> Result<String, crate::llm_client::LlmError> {
                panic!("must not be called for empty resume text");
            }
        }

        let out = improvement_suggestions("jd", "   ", &NeverCalled).await;
        assert_eq!(out, "No resume text provided.");
    }
}
