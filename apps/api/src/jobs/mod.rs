// Job search: scraping collaborator, listing cleanup, and route handlers.

pub mod handlers;
pub mod scraper;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::jobs::scraper::ScrapedJob;

/// A job listing as returned to the client, with the fixed defaults applied
/// for anything the scrape could not provide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub skills_required: String,
    pub experience_required: String,
    pub job_type: String,
    pub salary_range: String,
    pub date_posted: String,
    pub url: String,
    pub match_percentage: f64,
    pub best_resume: Option<Value>,
    pub improvement_suggestions: Option<String>,
}

impl From<ScrapedJob> for JobPosting {
    fn from(job: ScrapedJob) -> Self {
        JobPosting {
            title: default_if_empty(job.title, "Untitled Position"),
            company: default_if_empty(job.company, "Unknown Company"),
            location: default_if_empty(job.location, "Remote"),
            description: default_if_empty(job.description, "No description available"),
            skills_required: job.skills_required,
            experience_required: default_if_empty(job.experience_required, "Not specified"),
            job_type: "Full-time".to_string(),
            salary_range: "Not disclosed".to_string(),
            date_posted: job.date_posted,
            url: default_if_empty(job.url, "#"),
            match_percentage: 0.0,
            best_resume: None,
            improvement_suggestions: None,
        }
    }
}

fn default_if_empty(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Cleans scraped listings: lowercases for matching, filters by keyword in
/// title or description, deduplicates on (title, company) keeping the first
/// occurrence, and Title-Cases titles for display.
pub fn clean_and_deduplicate(jobs: Vec<ScrapedJob>, keyword: &str) -> Vec<ScrapedJob> {
    let keyword = keyword.to_lowercase();
    let mut seen = std::collections::HashSet::new();
    let mut cleaned = Vec::new();

    for mut job in jobs {
        job.title = job.title.to_lowercase();
        job.description = job.description.to_lowercase();

        if !keyword.is_empty()
            && !job.title.contains(&keyword)
            && !job.description.contains(&keyword)
        {
            continue;
        }

        let key = (job.title.clone(), job.company.clone());
        if !seen.insert(key) {
            continue;
        }

        job.title = title_case(&job.title);
        cleaned.push(job);
    }

    cleaned
}

/// Capitalizes the first letter of each whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, company: &str, description: &str) -> ScrapedJob {
        ScrapedJob {
            title: title.to_string(),
            company: company.to_string(),
            location: String::new(),
            description: description.to_string(),
            skills_required: String::new(),
            experience_required: String::new(),
            date_posted: String::new(),
            url: String::new(),
        }
    }

    #[test]
    fn test_keyword_filter_checks_title_and_description() {
        let jobs = vec![
            job("Rust Engineer", "Acme", "backend work"),
            job("Backend Engineer", "Acme", "mostly rust services"),
            job("Florist", "Petals", "flower arranging"),
        ];
        let cleaned = clean_and_deduplicate(jobs, "rust");
        assert_eq!(cleaned.len(), 2);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let jobs = vec![
            job("Engineer", "Acme", "first posting"),
            job("engineer", "Acme", "second posting"),
        ];
        let cleaned = clean_and_deduplicate(jobs, "");
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].description, "first posting");
    }

    #[test]
    fn test_titles_are_title_cased() {
        let jobs = vec![job("SENIOR rust ENGINEER", "Acme", "")];
        let cleaned = clean_and_deduplicate(jobs, "");
        assert_eq!(cleaned[0].title, "Senior Rust Engineer");
    }

    #[test]
    fn test_empty_keyword_keeps_everything() {
        let jobs = vec![job("A", "X", ""), job("B", "Y", "")];
        assert_eq!(clean_and_deduplicate(jobs, "").len(), 2);
    }

    #[test]
    fn test_posting_defaults_fill_missing_fields() {
        let posting = JobPosting::from(job("", "", ""));
        assert_eq!(posting.title, "Untitled Position");
        assert_eq!(posting.company, "Unknown Company");
        assert_eq!(posting.location, "Remote");
        assert_eq!(posting.description, "No description available");
        assert_eq!(posting.experience_required, "Not specified");
        assert_eq!(posting.job_type, "Full-time");
        assert_eq!(posting.salary_range, "Not disclosed");
        assert_eq!(posting.url, "#");
        assert_eq!(posting.match_percentage, 0.0);
    }
}
