//! Error types for the job-aggregation pipeline.
//!
//! The taxonomy separates three failure levels:
//! - [`SourceUnavailable`]: the only error a scraper adapter may emit
//! - [`SourceError`]: orchestrator-level wrapper carrying the source id
//! - [`RequestError`]: caller input rejected before any scraping starts
//! - [`CorpusError`]: corpus store I/O failures
//!
//! Source-level failures never propagate past the orchestrator; they are
//! recovered locally and surfaced in the per-source report.

use std::time::Duration;
use thiserror::Error;

/// The single failure condition a scraper adapter is allowed to surface.
///
/// Network failures, malformed upstream responses, and rate limiting all
/// collapse into this one type so the orchestrator can treat every source
/// uniformly.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SourceUnavailable(pub String);

impl From<reqwest::Error> for SourceUnavailable {
    fn from(e: reqwest::Error) -> Self {
        SourceUnavailable(format!("request failed: {e}"))
    }
}

impl From<serde_json::Error> for SourceUnavailable {
    fn from(e: serde_json::Error) -> Self {
        SourceUnavailable(format!("malformed upstream response: {e}"))
    }
}

/// A single source's failure as seen by the orchestrator.
///
/// Carries the source id so the per-source report can attribute the
/// failure. Never aborts the overall orchestration.
// Not derived with `thiserror` because it would treat the `source` field
// (the job-board id, a String) as the error's `source()` cause.
#[derive(Debug)]
pub enum SourceError {
    /// The adapter reported itself unavailable.
    Unavailable { source: String, reason: String },

    /// The adapter did not finish within the per-source deadline.
    Timeout { source: String, timeout: Duration },
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Unavailable { source, reason } => {
                write!(f, "source '{source}' unavailable: {reason}")
            }
            SourceError::Timeout { source, timeout } => {
                write!(f, "source '{source}' timed out after {timeout:?}")
            }
        }
    }
}

impl std::error::Error for SourceError {}

impl SourceError {
    /// The id of the source this error belongs to.
    pub fn source_id(&self) -> &str {
        match self {
            SourceError::Unavailable { source, .. } => source,
            SourceError::Timeout { source, .. } => source,
        }
    }
}

/// Caller-supplied request parameters failed validation.
///
/// Rejected before any scraping starts and surfaced straight back to the
/// ingress collaborator; never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("limit must be between 1 and {max}, got {given}")]
    LimitOutOfRange { given: usize, max: usize },

    #[error("unknown source '{0}'")]
    UnknownSource(String),
}

/// Corpus store failures (CSV load/save).
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus CSV error: {0}")]
    Csv(#[from] csv::Error),
}
