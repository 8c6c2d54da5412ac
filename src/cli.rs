//! Command-line interface definitions for Radar de Vagas.
//!
//! This module defines the CLI arguments and options using the `clap`
//! crate. The CLI is the ingress collaborator of the pipeline: it supplies
//! the query, location, limit, and source list, and reads back the merged
//! postings, the per-source report, and the skills breakdown.

use clap::Parser;

/// Command-line arguments for the Radar de Vagas aggregator.
///
/// # Examples
///
/// ```sh
/// # Default sources (the two usable without a browser)
/// radar_vagas "desenvolvedor frontend"
///
/// # Explicit sources and a JSON run report
/// radar_vagas "frontend" -s remotive,getonboard,indeed --json-report run.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search query (required, non-empty)
    pub query: String,

    /// Location filter passed to the sources
    #[arg(short, long, default_value = "Brasil")]
    pub location: String,

    /// Maximum postings per source (1..=100)
    #[arg(short = 'n', long, default_value_t = 50)]
    pub limit: usize,

    /// Comma-separated source ids to scrape
    #[arg(short, long, value_delimiter = ',', default_value = "getonboard,remotive")]
    pub sources: Vec<String>,

    /// Hard per-source timeout in seconds
    #[arg(long, env = "SCRAPE_TIMEOUT_SECS", default_value_t = 300)]
    pub timeout_secs: u64,

    /// Path of the corpus CSV file
    #[arg(short, long, env = "JOBS_CORPUS", default_value = "data/jobs.csv")]
    pub corpus_path: String,

    /// Number of top terms to report per skill category
    #[arg(short, long, default_value_t = 15)]
    pub top: usize,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub json_report: Option<String>,

    /// Scrape and classify without touching the corpus file
    #[arg(long)]
    pub no_save: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["radar_vagas", "frontend developer"]);
        assert_eq!(cli.query, "frontend developer");
        assert_eq!(cli.location, "Brasil");
        assert_eq!(cli.limit, 50);
        assert_eq!(cli.sources, vec!["getonboard", "remotive"]);
        assert_eq!(cli.timeout_secs, 300);
        assert_eq!(cli.corpus_path, "data/jobs.csv");
        assert_eq!(cli.top, 15);
        assert!(cli.json_report.is_none());
        assert!(!cli.no_save);
    }

    #[test]
    fn test_cli_source_list_parsing() {
        let cli = Cli::parse_from([
            "radar_vagas",
            "frontend",
            "--sources",
            "remotive,indeed,linkedin",
        ]);
        assert_eq!(cli.sources, vec!["remotive", "indeed", "linkedin"]);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "radar_vagas",
            "frontend",
            "-l",
            "Remoto",
            "-n",
            "20",
            "-t",
            "5",
            "-c",
            "/tmp/jobs.csv",
        ]);
        assert_eq!(cli.location, "Remoto");
        assert_eq!(cli.limit, 20);
        assert_eq!(cli.top, 5);
        assert_eq!(cli.corpus_path, "/tmp/jobs.csv");
    }
}
