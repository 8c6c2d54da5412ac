//! Job-board scraper adapters.
//!
//! Each upstream job board gets one adapter implementing the [`JobScraper`]
//! contract: given a query, a location filter, and a result limit, produce
//! a finite list of [`JobPosting`] values or fail with a single
//! [`SourceUnavailable`] condition. The orchestrator is polymorphic over
//! the contract, never over concrete adapter types.
//!
//! # Supported sources
//!
//! | Source id | Module | Method | Notes |
//! |-----------|--------|--------|-------|
//! | `remotive` | [`remotive`] | JSON API | Expands the query into synonyms |
//! | `getonboard` | [`getonboard`] | JSON API | LatAm tech board |
//! | `indeed` | [`indeed`] | HTML scraping | Pages result cards 10 at a time |
//! | `linkedin` | [`linkedin`] | placeholder | Guest scraping is blocked upstream |
//! | `glassdoor` | [`glassdoor`] | placeholder | Guest scraping is blocked upstream |
//!
//! Adapters must not leak internal errors: network failures, malformed
//! upstream responses, and rate limiting all surface as
//! [`SourceUnavailable`]. New sources are added by implementing the trait
//! and registering the adapter in [`registry`].

pub mod getonboard;
pub mod glassdoor;
pub mod indeed;
pub mod linkedin;
pub mod remotive;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SourceUnavailable;
use crate::models::JobPosting;

/// The capability contract every source adapter implements.
#[async_trait]
pub trait JobScraper: Send + Sync {
    /// Stable identifier of this source (the `source` tag on its postings).
    fn id(&self) -> &'static str;

    /// Search the upstream board.
    ///
    /// `query` is required and non-empty, `location` defaults to a broad
    /// value at the ingress, and `limit` caps the number of postings
    /// returned. The result is a finite, fully-materialized list.
    async fn search(
        &self,
        query: &str,
        location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, SourceUnavailable>;
}

/// All known adapters, keyed by source id.
pub fn registry() -> HashMap<&'static str, Arc<dyn JobScraper>> {
    let adapters: Vec<Arc<dyn JobScraper>> = vec![
        Arc::new(indeed::IndeedScraper::default()),
        Arc::new(linkedin::LinkedInScraper),
        Arc::new(glassdoor::GlassdoorScraper),
        Arc::new(remotive::RemotiveScraper::default()),
        Arc::new(getonboard::GetOnBoardScraper::default()),
    ];
    adapters.into_iter().map(|a| (a.id(), a)).collect()
}

/// The source ids the reference deployment knows about.
pub fn known_sources() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = registry().into_keys().collect();
    ids.sort_unstable();
    ids
}
