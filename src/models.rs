//! Data models for job postings and scrape-run reporting.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`JobPosting`]: one discovered listing, as scraped from a job board
//! - [`JobKey`]: the composite deduplication key derived from a posting
//! - [`SourceReport`]: per-source outcome of one multi-source scrape call
//! - [`RunReport`]: the JSON-serializable summary of a whole run
//!
//! `JobPosting` doubles as the on-disk corpus row shape: the same struct is
//! serialized to CSV by the corpus store and to JSON by the run report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::skills::aggregator::TopSkills;

/// Sentinel used when a source does not expose a field.
///
/// Title, company, and location default to this value rather than being
/// absent; descriptions default to the empty string instead.
pub const UNKNOWN: &str = "N/A";

/// One discovered job listing.
///
/// Created by a scraper adapter at fetch time and immutable thereafter.
/// Consumed by the orchestrator for dedup, by the classifier for skill
/// extraction, and by the corpus store for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    /// The listing title, or [`UNKNOWN`].
    pub title: String,
    /// The hiring company, or [`UNKNOWN`].
    pub company: String,
    /// The listing's location text, or [`UNKNOWN`].
    pub location: String,
    /// Free-text description. May be empty, never null.
    #[serde(default)]
    pub description: String,
    /// Tag of the adapter that produced this posting (e.g. `"remotive"`).
    pub source: String,
    /// External identifier when the source exposes one.
    pub url: Option<String>,
}

impl JobPosting {
    /// The composite deduplication key for this posting.
    ///
    /// A non-empty url takes precedence; otherwise the (title, company,
    /// location) triple is used. Returns `None` when no url is present and
    /// all three fields sit at the [`UNKNOWN`] sentinel, in which case the
    /// posting is never deduplicated against.
    pub fn dedup_key(&self) -> Option<JobKey> {
        if let Some(url) = &self.url {
            if !url.is_empty() {
                return Some(JobKey::Url(url.clone()));
            }
        }
        if self.title == UNKNOWN && self.company == UNKNOWN && self.location == UNKNOWN {
            return None;
        }
        Some(JobKey::Fields(
            self.title.clone(),
            self.company.clone(),
            self.location.clone(),
        ))
    }
}

/// Deduplication key for a [`JobPosting`].
///
/// Two postings collide when they map to the same key. Which of the
/// colliding records survives depends on the pass: first occurrence wins
/// inside one multi-source merge, last occurrence wins in the corpus merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JobKey {
    /// The posting's url, when present and non-empty.
    Url(String),
    /// Fallback: (title, company, location).
    Fields(String, String, String),
}

/// Outcome of one source within a multi-source scrape call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReport {
    /// Number of postings the adapter returned (before cross-source dedup).
    pub jobs_found: usize,
    /// Whether the adapter completed within its deadline.
    pub success: bool,
    /// Failure detail when `success` is false.
    pub error: Option<String>,
}

impl SourceReport {
    pub fn succeeded(jobs_found: usize) -> Self {
        SourceReport { jobs_found, success: true, error: None }
    }

    pub fn failed(error: String) -> Self {
        SourceReport { jobs_found: 0, success: false, error: Some(error) }
    }
}

/// JSON-serializable summary of one scrape-and-analyze run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub query: String,
    pub location: String,
    pub sources_requested: Vec<String>,
    pub results_by_source: BTreeMap<String, SourceReport>,
    pub total_jobs_found: usize,
    pub jobs: Vec<JobPosting>,
    pub skills: TopSkills,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, company: &str, location: &str, url: Option<&str>) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            description: String::new(),
            source: "test".to_string(),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_dedup_key_prefers_url() {
        let job = posting("Dev", "Acme", "Remote", Some("https://example.com/1"));
        assert_eq!(
            job.dedup_key(),
            Some(JobKey::Url("https://example.com/1".to_string()))
        );
    }

    #[test]
    fn test_dedup_key_falls_back_to_triple() {
        let job = posting("Dev", "Acme", "Remote", None);
        assert_eq!(
            job.dedup_key(),
            Some(JobKey::Fields(
                "Dev".to_string(),
                "Acme".to_string(),
                "Remote".to_string()
            ))
        );
    }

    #[test]
    fn test_empty_url_is_not_a_key() {
        let job = posting("Dev", "Acme", "Remote", Some(""));
        assert_eq!(
            job.dedup_key(),
            Some(JobKey::Fields(
                "Dev".to_string(),
                "Acme".to_string(),
                "Remote".to_string()
            ))
        );
    }

    #[test]
    fn test_all_sentinel_posting_has_no_key() {
        let job = posting(UNKNOWN, UNKNOWN, UNKNOWN, None);
        assert_eq!(job.dedup_key(), None);
    }

    #[test]
    fn test_partial_sentinel_posting_still_keys() {
        let job = posting(UNKNOWN, "Acme", UNKNOWN, None);
        assert!(job.dedup_key().is_some());
    }

    #[test]
    fn test_job_posting_json_roundtrip() {
        let job = posting("Dev", "Acme", "Remote", Some("https://example.com/1"));
        let json = serde_json::to_string(&job).unwrap();
        let back: JobPosting = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn test_source_report_constructors() {
        let ok = SourceReport::succeeded(7);
        assert_eq!(ok.jobs_found, 7);
        assert!(ok.success);
        assert!(ok.error.is_none());

        let bad = SourceReport::failed("boom".to_string());
        assert_eq!(bad.jobs_found, 0);
        assert!(!bad.success);
        assert_eq!(bad.error.as_deref(), Some("boom"));
    }
}
