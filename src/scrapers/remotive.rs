//! Remotive job-board adapter.
//!
//! Queries the public [Remotive](https://remotive.com) remote-jobs API.
//! The query is expanded into a small synonym list (front-end spelling
//! variants plus a few broad fallbacks) and each synonym is queried in turn
//! until the limit is reached, deduplicating within the adapter by url or
//! (title, company).

use itertools::Itertools;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::SourceUnavailable;
use crate::models::{JobPosting, UNKNOWN};
use crate::scrapers::JobScraper;

const DEFAULT_BASE_URL: &str = "https://remotive.com";

pub struct RemotiveScraper {
    base_url: String,
}

impl Default for RemotiveScraper {
    fn default() -> Self {
        RemotiveScraper { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl RemotiveScraper {
    /// Adapter pointed at an alternative API host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        RemotiveScraper { base_url: base_url.into() }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    jobs: Vec<RemoteJob>,
}

#[derive(Debug, Deserialize)]
struct RemoteJob {
    title: Option<String>,
    company_name: Option<String>,
    candidate_required_location: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

impl RemoteJob {
    fn into_posting(self) -> JobPosting {
        JobPosting {
            title: self.title.unwrap_or_else(|| UNKNOWN.to_string()),
            company: self.company_name.unwrap_or_else(|| UNKNOWN.to_string()),
            location: self
                .candidate_required_location
                .unwrap_or_else(|| "Remoto".to_string()),
            description: self.description.unwrap_or_default(),
            source: "remotive".to_string(),
            url: self.url,
        }
    }
}

/// Within-adapter dedup key: url when present, else title+company.
fn seen_key(job: &RemoteJob) -> Option<String> {
    if let Some(url) = &job.url {
        if !url.is_empty() {
            return Some(url.clone());
        }
    }
    match (&job.title, &job.company_name) {
        (None, None) => None,
        (title, company) => Some(format!(
            "{}-{}",
            title.as_deref().unwrap_or_default(),
            company.as_deref().unwrap_or_default()
        )),
    }
}

#[async_trait::async_trait]
impl JobScraper for RemotiveScraper {
    fn id(&self) -> &'static str {
        "remotive"
    }

    #[instrument(level = "info", skip(self), fields(source = self.id()))]
    async fn search(
        &self,
        query: &str,
        _location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, SourceUnavailable> {
        let synonyms = [
            query.to_string(),
            query.replace("front end", "frontend"),
            query.replace("front-end", "frontend"),
            "frontend".to_string(),
            "react".to_string(),
            "javascript".to_string(),
        ];

        let mut seen = std::collections::HashSet::new();
        let mut postings: Vec<JobPosting> = Vec::new();

        // Queries without the expanded spelling collapse to the same
        // string; no point hitting the API twice for them.
        for synonym in synonyms.iter().unique() {
            if postings.len() >= limit {
                break;
            }
            let url = format!(
                "{}/api/remote-jobs?search={}",
                self.base_url,
                urlencoding::encode(synonym)
            );
            let body = match fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    // One failed synonym query is not fatal; the next one
                    // may still fill the limit.
                    warn!(%url, error = %e, "Remotive query failed, skipping synonym");
                    continue;
                }
            };
            let response: SearchResponse = serde_json::from_str(&body)?;
            debug!(synonym = %synonym, count = response.jobs.len(), "Remotive page parsed");

            for job in response.jobs {
                if postings.len() >= limit {
                    break;
                }
                // Entries with no identity at all are skipped here; the
                // orchestrator-level rule for keyless postings applies only
                // across sources.
                let Some(key) = seen_key(&job) else { continue };
                if seen.insert(key) {
                    postings.push(job.into_posting());
                }
            }
        }

        Ok(postings)
    }
}

async fn fetch(url: &str) -> Result<String, SourceUnavailable> {
    let response = reqwest::get(url).await?;
    let response = response
        .error_for_status()
        .map_err(|e| SourceUnavailable(format!("upstream status: {e}")))?;
    Ok(response.text().await?)
}
