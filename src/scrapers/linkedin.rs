//! LinkedIn placeholder adapter.
//!
//! LinkedIn blocks anonymous job scraping, so this adapter returns no
//! postings. It stays registered under the `linkedin` source id so
//! requests naming it validate and show up in the per-source report.

use tracing::debug;

use crate::error::SourceUnavailable;
use crate::models::JobPosting;
use crate::scrapers::JobScraper;

pub struct LinkedInScraper;

#[async_trait::async_trait]
impl JobScraper for LinkedInScraper {
    fn id(&self) -> &'static str {
        "linkedin"
    }

    async fn search(
        &self,
        query: &str,
        _location: &str,
        _limit: usize,
    ) -> Result<Vec<JobPosting>, SourceUnavailable> {
        debug!(%query, "LinkedIn adapter is a placeholder, returning no postings");
        Ok(Vec::new())
    }
}
