//! Glassdoor placeholder adapter.
//!
//! Glassdoor sits behind aggressive bot protection, so this adapter
//! returns no postings. It stays registered under the `glassdoor` source
//! id so requests naming it validate and show up in the per-source report.

use tracing::debug;

use crate::error::SourceUnavailable;
use crate::models::JobPosting;
use crate::scrapers::JobScraper;

pub struct GlassdoorScraper;

#[async_trait::async_trait]
impl JobScraper for GlassdoorScraper {
    fn id(&self) -> &'static str {
        "glassdoor"
    }

    async fn search(
        &self,
        query: &str,
        _location: &str,
        _limit: usize,
    ) -> Result<Vec<JobPosting>, SourceUnavailable> {
        debug!(%query, "Glassdoor adapter is a placeholder, returning no postings");
        Ok(Vec::new())
    }
}
