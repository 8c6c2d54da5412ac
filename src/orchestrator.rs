//! Concurrent multi-source scrape orchestration.
//!
//! Runs one task per requested source, isolates per-source failures and
//! timeouts, merges successful results in source-iteration order, and
//! deduplicates first-write-wins on the composite job key. A source
//! failing — or every source failing — never fails the call as a whole;
//! the outcome is always a merged set plus a per-source report.

use futures::future::join_all;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::error::{RequestError, SourceError};
use crate::models::{JobPosting, SourceReport};
use crate::scrapers::JobScraper;

/// Upper bound on the per-source result limit accepted from the ingress.
pub const MAX_LIMIT: usize = 100;

/// Validate caller-supplied request parameters before any scraping starts.
///
/// Rejects empty queries, limits outside `1..=MAX_LIMIT`, and source ids
/// absent from the registry. A failed validation is surfaced straight back
/// to the caller and never retried.
pub fn validate_request(
    query: &str,
    limit: usize,
    sources: &[String],
    registry: &HashMap<&'static str, Arc<dyn JobScraper>>,
) -> Result<(), RequestError> {
    if query.trim().is_empty() {
        return Err(RequestError::EmptyQuery);
    }
    if limit == 0 || limit > MAX_LIMIT {
        return Err(RequestError::LimitOutOfRange { given: limit, max: MAX_LIMIT });
    }
    for source in sources {
        if !registry.contains_key(source.as_str()) {
            return Err(RequestError::UnknownSource(source.clone()));
        }
    }
    Ok(())
}

/// Invoke exactly one adapter under a hard timeout.
///
/// On timeout or adapter failure this returns a [`SourceError`] carrying
/// the source id; nothing is raised past this boundary.
#[instrument(level = "info", skip(scraper), fields(source = scraper.id()))]
pub async fn scrape_one(
    scraper: Arc<dyn JobScraper>,
    query: &str,
    location: &str,
    limit: usize,
    timeout: Duration,
) -> Result<Vec<JobPosting>, SourceError> {
    match tokio::time::timeout(timeout, scraper.search(query, location, limit)).await {
        Ok(Ok(jobs)) => {
            info!(count = jobs.len(), "Source scrape completed");
            Ok(jobs)
        }
        Ok(Err(e)) => Err(SourceError::Unavailable {
            source: scraper.id().to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Err(SourceError::Timeout {
            source: scraper.id().to_string(),
            timeout,
        }),
    }
}

/// Run every requested source concurrently and merge the results.
///
/// One task per source; a source's timeout or error neither cancels nor
/// delays its siblings. Merged output follows source-iteration order (not
/// completion order), which also decides dedup collisions: the first
/// occurrence of a key wins within one call. Total failure of every source
/// yields an empty merged set with all-failed reports — a valid outcome,
/// not an error.
#[instrument(level = "info", skip(registry, sources), fields(sources = sources.len()))]
pub async fn scrape_many(
    registry: &HashMap<&'static str, Arc<dyn JobScraper>>,
    sources: &[String],
    query: &str,
    location: &str,
    limit: usize,
    timeout: Duration,
) -> (Vec<JobPosting>, BTreeMap<String, SourceReport>) {
    let tasks: Vec<_> = sources
        .iter()
        .map(|source| {
            let adapter = registry.get(source.as_str()).cloned();
            let source = source.clone();
            let query = query.to_string();
            let location = location.to_string();
            tokio::spawn(async move {
                let outcome = match adapter {
                    Some(adapter) => {
                        scrape_one(adapter, &query, &location, limit, timeout).await
                    }
                    // Validation normally catches this; keep the report
                    // shape intact if a caller skips it.
                    None => Err(SourceError::Unavailable {
                        source: source.clone(),
                        reason: "unknown source".to_string(),
                    }),
                };
                (source, outcome)
            })
        })
        .collect();

    let mut merged: Vec<JobPosting> = Vec::new();
    let mut reports: BTreeMap<String, SourceReport> = BTreeMap::new();

    // join_all preserves task order, so the merge scans sources in the
    // caller-supplied iteration order regardless of completion order.
    for joined in join_all(tasks).await {
        match joined {
            Ok((source, Ok(jobs))) => {
                reports.insert(source, SourceReport::succeeded(jobs.len()));
                merged.extend(jobs);
            }
            Ok((source, Err(e))) => {
                warn!(%source, error = %e, "Source failed, continuing with the others");
                reports.insert(source, SourceReport::failed(e.to_string()));
            }
            Err(join_error) => {
                // A panicked task loses its source label with it.
                warn!(error = %join_error, "Scrape task panicked");
            }
        }
    }

    let before = merged.len();
    let deduped = dedup_first_wins(merged);
    info!(
        total = deduped.len(),
        duplicates = before - deduped.len(),
        sources = sources.len(),
        "Merged multi-source scrape results"
    );

    (deduped, reports)
}

/// Drop postings whose key was already seen, scanning in order.
///
/// Postings with no formable key are always kept. Idempotent: running it
/// over an already-deduplicated set returns the same set.
pub fn dedup_first_wins(jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen = HashSet::new();
    jobs.into_iter()
        .filter(|job| match job.dedup_key() {
            Some(key) => seen.insert(key),
            None => true,
        })
        .collect()
}
