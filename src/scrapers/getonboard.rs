//! GetOnBoard job-board adapter.
//!
//! Queries the public [GetOnBoard](https://www.getonbrd.com) search API, a
//! LatAm-focused tech board. One request per search; the response carries
//! job attributes nested under `data[].attributes`.

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::SourceUnavailable;
use crate::models::{JobPosting, UNKNOWN};
use crate::scrapers::JobScraper;

const DEFAULT_BASE_URL: &str = "https://www.getonbrd.com";

pub struct GetOnBoardScraper {
    base_url: String,
}

impl Default for GetOnBoardScraper {
    fn default() -> Self {
        GetOnBoardScraper { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl GetOnBoardScraper {
    /// Adapter pointed at an alternative API host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        GetOnBoardScraper { base_url: base_url.into() }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    attributes: Attributes,
}

#[derive(Debug, Default, Deserialize)]
struct Attributes {
    title: Option<String>,
    company: Option<Company>,
    remote_modality: Option<String>,
    remote_zone: Option<String>,
    description: Option<String>,
    external_url: Option<String>,
    permalink: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Company {
    name: Option<String>,
}

impl Attributes {
    fn into_posting(self) -> JobPosting {
        JobPosting {
            title: self.title.unwrap_or_else(|| UNKNOWN.to_string()),
            company: self
                .company
                .and_then(|c| c.name)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            location: self
                .remote_modality
                .or(self.remote_zone)
                .unwrap_or_else(|| "Remoto/LatAm".to_string()),
            description: self.description.unwrap_or_default(),
            source: "getonboard".to_string(),
            url: self.external_url.or(self.permalink),
        }
    }
}

#[async_trait::async_trait]
impl JobScraper for GetOnBoardScraper {
    fn id(&self) -> &'static str {
        "getonboard"
    }

    #[instrument(level = "info", skip(self), fields(source = self.id()))]
    async fn search(
        &self,
        query: &str,
        _location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, SourceUnavailable> {
        let url = format!(
            "{}/api/v0/search/jobs?query={}",
            self.base_url,
            urlencoding::encode(query)
        );

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()
            .map_err(|e| SourceUnavailable(format!("upstream status: {e}")))?;
        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!(count = parsed.data.len(), "GetOnBoard page parsed");

        Ok(parsed
            .data
            .into_iter()
            .take(limit)
            .map(|item| item.attributes.into_posting())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "data": [
            {
                "attributes": {
                    "title": "Backend Developer",
                    "company": {"name": "Initech"},
                    "remote_modality": "fully_remote",
                    "description": "Python and PostgreSQL",
                    "permalink": "https://www.getonbrd.com/jobs/1"
                }
            },
            {
                "attributes": {
                    "title": "Data Engineer",
                    "company": {"name": "Hooli"},
                    "remote_zone": "latam",
                    "external_url": "https://hooli.example/jobs/7"
                }
            },
            {
                "attributes": {}
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_search_parses_attributes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v0/search/jobs")
            .match_query(mockito::Matcher::UrlEncoded(
                "query".into(),
                "backend developer".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(FIXTURE)
            .create_async()
            .await;

        let scraper = GetOnBoardScraper::with_base_url(server.url());
        let jobs = scraper.search("backend developer", "Brasil", 10).await.unwrap();

        mock.assert_async().await;
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].title, "Backend Developer");
        assert_eq!(jobs[0].company, "Initech");
        assert_eq!(jobs[0].location, "fully_remote");
        assert_eq!(jobs[0].url.as_deref(), Some("https://www.getonbrd.com/jobs/1"));
        // external_url wins over permalink; remote_zone is the fallback
        assert_eq!(jobs[1].url.as_deref(), Some("https://hooli.example/jobs/7"));
        assert_eq!(jobs[1].location, "latam");
        // bare attributes collapse to sentinels
        assert_eq!(jobs[2].title, UNKNOWN);
        assert_eq!(jobs[2].location, "Remoto/LatAm");
        assert_eq!(jobs[2].url, None);
    }

    #[tokio::test]
    async fn test_limit_truncates_results() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v0/search/jobs")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(FIXTURE)
            .create_async()
            .await;

        let scraper = GetOnBoardScraper::with_base_url(server.url());
        let jobs = scraper.search("backend", "Brasil", 1).await.unwrap();
        assert_eq!(jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v0/search/jobs")
            .match_query(mockito::Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let scraper = GetOnBoardScraper::with_base_url(server.url());
        let err = scraper.search("backend", "Brasil", 5).await.unwrap_err();
        assert!(err.to_string().contains("upstream status"));
    }
}
