//! Indeed job-board adapter.
//!
//! Scrapes the Brazilian Indeed search results pages. Result cards are
//! `a.tapItem` anchors carrying the title, company, location, and a short
//! description snippet; pagination advances in steps of 10 via the `start`
//! query parameter until the limit is reached or a page past the first
//! comes back empty.

use scraper::{Html, Selector};
use tracing::{debug, instrument};
use url::Url;

use crate::error::SourceUnavailable;
use crate::models::{JobPosting, UNKNOWN};
use crate::scrapers::JobScraper;

const DEFAULT_BASE_URL: &str = "https://br.indeed.com";
const PAGE_STEP: usize = 10;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

pub struct IndeedScraper {
    base_url: String,
}

impl Default for IndeedScraper {
    fn default() -> Self {
        IndeedScraper { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl IndeedScraper {
    /// Adapter pointed at an alternative host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        IndeedScraper { base_url: base_url.into() }
    }

    /// Parse all job cards out of one results page.
    fn parse_cards(&self, html: &str) -> Vec<JobPosting> {
        let document = Html::parse_document(html);
        let card_selector = Selector::parse("a.tapItem").unwrap();
        let title_selector = Selector::parse("h2.jobTitle").unwrap();
        let company_selector = Selector::parse("span.companyName").unwrap();
        let location_selector = Selector::parse("div.companyLocation").unwrap();
        let snippet_selector = Selector::parse("div.job-snippet").unwrap();

        let base = Url::parse(&self.base_url).ok();

        let mut postings = Vec::new();
        for card in document.select(&card_selector) {
            let text_of = |selector: &Selector| {
                card.select(selector)
                    .next()
                    .map(|el| el.text().collect::<Vec<_>>().join(" ").trim().to_string())
            };

            let url = card.value().attr("href").map(|href| {
                if href.starts_with('/') {
                    base.as_ref()
                        .and_then(|b| b.join(href).ok())
                        .map(|u| u.to_string())
                        .unwrap_or_else(|| href.to_string())
                } else {
                    href.to_string()
                }
            });

            postings.push(JobPosting {
                title: text_of(&title_selector).unwrap_or_else(|| UNKNOWN.to_string()),
                company: text_of(&company_selector).unwrap_or_else(|| UNKNOWN.to_string()),
                location: text_of(&location_selector).unwrap_or_else(|| UNKNOWN.to_string()),
                description: text_of(&snippet_selector).unwrap_or_default(),
                source: "indeed".to_string(),
                url,
            });
        }
        postings
    }
}

#[async_trait::async_trait]
impl JobScraper for IndeedScraper {
    fn id(&self) -> &'static str {
        "indeed"
    }

    #[instrument(level = "info", skip(self), fields(source = self.id()))]
    async fn search(
        &self,
        query: &str,
        location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, SourceUnavailable> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        let base = format!(
            "{}/jobs?q={}&l={}",
            self.base_url,
            query.replace(' ', "+"),
            urlencoding::encode(location)
        );

        let mut postings: Vec<JobPosting> = Vec::new();
        let mut start = 0usize;

        while postings.len() < limit {
            let page_url = if start == 0 {
                base.clone()
            } else {
                format!("{base}&start={start}")
            };

            let body = client
                .get(&page_url)
                .header("Accept-Language", "pt-BR,pt;q=0.9,en;q=0.8")
                .send()
                .await?
                .error_for_status()
                .map_err(|e| SourceUnavailable(format!("upstream status: {e}")))?
                .text()
                .await?;

            let page_jobs = self.parse_cards(&body);
            debug!(%page_url, count = page_jobs.len(), "Indeed page parsed");

            if page_jobs.is_empty() {
                break;
            }

            for job in page_jobs {
                postings.push(job);
                if postings.len() >= limit {
                    break;
                }
            }
            start += PAGE_STEP;
        }

        Ok(postings)
    }
}
