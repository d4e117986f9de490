//! Job scraping collaborator — keyword/location in, tabular rows out.
//!
//! The scraper is an external boundary: `AppState` carries it as
//! `Arc<dyn JobScraper>` so handlers can be tested with a stub, and the
//! production `TimesJobsScraper` stays swappable.

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::debug;

use crate::errors::AppError;

/// One raw row from a job board listing page, before cleanup and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub skills_required: String,
    pub experience_required: String,
    pub date_posted: String,
    pub url: String,
}

#[async_trait]
pub trait JobScraper: Send + Sync {
    async fn scrape(&self, keyword: &str, location: &str) -> Result<Vec<ScrapedJob>, AppError>;
}

const SEARCH_URL: &str = "https://www.timesjobs.com/candidate/job-search.html";

/// Scrapes TimesJobs search result pages.
pub struct TimesJobsScraper {
    client: reqwest::Client,
}

impl TimesJobsScraper {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent("Mozilla/5.0 (X11; Linux x86_64)")
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for TimesJobsScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobScraper for TimesJobsScraper {
    async fn scrape(&self, keyword: &str, location: &str) -> Result<Vec<ScrapedJob>, AppError> {
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("searchType", "personalizedSearch"),
                ("from", "submit"),
                ("txtKeywords", keyword),
                ("txtLocation", location),
            ])
            .send()
            .await
            .map_err(|e| AppError::Scrape(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Scrape(format!(
                "job board returned status {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Scrape(format!("failed to read response body: {e}")))?;

        let jobs = parse_listing(&body);
        debug!(keyword, location, count = jobs.len(), "scraped job listings");
        Ok(jobs)
    }
}

/// Parses a TimesJobs search result page into raw rows.
/// Unrecognized markup yields fewer rows, never an error.
pub fn parse_listing(html: &str) -> Vec<ScrapedJob> {
    let document = Html::parse_document(html);

    let card = Selector::parse("li.clearfix.job-bx").expect("valid selector");
    let title_link = Selector::parse("h2 a").expect("valid selector");
    let company = Selector::parse("h3.joblist-comp-name").expect("valid selector");
    let details = Selector::parse("ul.top-jd-dtl li").expect("valid selector");
    let description = Selector::parse("ul.list-job-dtl li").expect("valid selector");
    let skills = Selector::parse("span.srp-skills").expect("valid selector");
    let posted = Selector::parse("span.sim-posted").expect("valid selector");

    document
        .select(&card)
        .map(|element| {
            let (title, url) = element
                .select(&title_link)
                .next()
                .map(|a| {
                    (
                        collapse_whitespace(&a.text().collect::<String>()),
                        a.value().attr("href").unwrap_or_default().to_string(),
                    )
                })
                .unwrap_or_default();

            let mut detail_texts = element
                .select(&details)
                .map(|li| collapse_whitespace(&li.text().collect::<String>()));
            let experience_required = detail_texts.next().unwrap_or_default();
            let location = detail_texts.next().unwrap_or_default();

            ScrapedJob {
                title,
                company: first_text(&element, &company),
                location,
                description: first_text(&element, &description),
                skills_required: first_text(&element, &skills),
                experience_required,
                date_posted: first_text(&element, &posted),
                url,
            }
        })
        .collect()
}

fn first_text(element: &scraper::ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|e| collapse_whitespace(&e.text().collect::<String>()))
        .unwrap_or_default()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_FIXTURE: &str = r#"
        <html><body><ul>
        <li class="clearfix job-bx wht-shd-bx">
            <header class="clearfix">
                <h2><a href="https://example.org/job/1">Rust   Developer</a></h2>
                <h3 class="joblist-comp-name">Acme Systems</h3>
                <ul class="top-jd-dtl clearfix">
                    <li><i></i>2 - 5 yrs</li>
                    <li><i></i>Bangalore</li>
                </ul>
            </header>
            <ul class="list-job-dtl clearfix">
                <li>Build and maintain backend services in Rust.</li>
            </ul>
            <span class="srp-skills">rust , tokio , sql</span>
            <span class="sim-posted"><span>Posted few days ago</span></span>
        </li>
        <li class="clearfix job-bx">
            <header class="clearfix">
                <h2><a href="https://example.org/job/2">Data Analyst</a></h2>
                <h3 class="joblist-comp-name">Beta Corp</h3>
            </header>
        </li>
        </ul></body></html>
    "#;

    #[test]
    fn test_parse_listing_extracts_rows() {
        let jobs = parse_listing(LISTING_FIXTURE);
        assert_eq!(jobs.len(), 2);

        let first = &jobs[0];
        assert_eq!(first.title, "Rust Developer");
        assert_eq!(first.company, "Acme Systems");
        assert_eq!(first.location, "Bangalore");
        assert_eq!(first.experience_required, "2 - 5 yrs");
        assert_eq!(first.skills_required, "rust , tokio , sql");
        assert_eq!(first.date_posted, "Posted few days ago");
        assert_eq!(first.url, "https://example.org/job/1");
        assert!(first.description.contains("backend services"));
    }

    #[test]
    fn test_parse_listing_tolerates_sparse_cards() {
        let jobs = parse_listing(LISTING_FIXTURE);
        let sparse = &jobs[1];
        assert_eq!(sparse.title, "Data Analyst");
        assert_eq!(sparse.location, "");
        assert_eq!(sparse.skills_required, "");
    }

    #[test]
    fn test_parse_listing_empty_page_yields_no_rows() {
        assert!(parse_listing("<html><body></body></html>").is_empty());
    }
}
