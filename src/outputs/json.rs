//! JSON run-report output.

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

use crate::models::RunReport;

/// Serialize a [`RunReport`] to a pretty-printed JSON file, creating
/// parent directories as needed.
#[instrument(level = "info", skip(report), fields(path = %path.display()))]
pub async fn write_report(report: &RunReport, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    fs::write(path, json).await?;
    info!(jobs = report.jobs.len(), "Wrote JSON run report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobPosting, SourceReport};
    use crate::skills::aggregator::TopSkills;
    use std::collections::BTreeMap;

    fn sample_report() -> RunReport {
        let mut results_by_source = BTreeMap::new();
        results_by_source.insert("remotive".to_string(), SourceReport::succeeded(1));
        results_by_source.insert(
            "indeed".to_string(),
            SourceReport::failed("timed out".to_string()),
        );
        RunReport {
            query: "frontend".to_string(),
            location: "Brasil".to_string(),
            sources_requested: vec!["remotive".to_string(), "indeed".to_string()],
            results_by_source,
            total_jobs_found: 1,
            jobs: vec![JobPosting {
                title: "Dev".to_string(),
                company: "Acme".to_string(),
                location: "SP".to_string(),
                description: "React".to_string(),
                source: "remotive".to_string(),
                url: Some("https://example.com/1".to_string()),
            }],
            skills: TopSkills {
                dev: vec![("react".to_string(), 1)],
                cloud: vec![],
                soft: vec![],
            },
        }
    }

    #[tokio::test]
    async fn test_write_report_roundtrips_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/run.json");

        write_report(&sample_report(), &path).await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["query"], "frontend");
        assert_eq!(value["total_jobs_found"], 1);
        assert_eq!(value["results_by_source"]["remotive"]["success"], true);
        assert_eq!(value["results_by_source"]["indeed"]["success"], false);
        assert_eq!(value["skills"]["dev"][0][0], "react");
    }
}
