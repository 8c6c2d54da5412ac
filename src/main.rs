//! # Radar de Vagas
//!
//! A job-aggregation and skills-classification pipeline that collects
//! postings from several independent job boards, merges them into a single
//! deduplicated corpus, and extracts a normalized skills profile
//! (development stack, cloud/DevOps, soft skills) from the free-text
//! descriptions.
//!
//! ## Usage
//!
//! ```sh
//! radar_vagas "desenvolvedor frontend" -s remotive,getonboard
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Validation**: reject bad queries/limits/source ids before scraping
//! 2. **Scraping**: one concurrent, timeout-bounded task per source, with
//!    per-source failure isolation and first-write-wins dedup
//! 3. **Classification**: tokenize descriptions against the skill lexicon
//!    and aggregate ranked top-N counts per category
//! 4. **Persistence**: fold the new postings into the CSV corpus with
//!    last-write-wins dedup

use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod corpus;
mod error;
mod models;
mod orchestrator;
mod outputs;
mod scrapers;
mod skills;

use cli::Cli;
use corpus::CorpusStore;
use models::RunReport;
use outputs::{json, text};
use skills::aggregator;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("radar_vagas starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.query, ?args.sources, args.limit, "Parsed CLI arguments");

    let registry = scrapers::registry();

    // ---- Validate the request before any scraping starts ----
    if let Err(e) = orchestrator::validate_request(&args.query, args.limit, &args.sources, &registry)
    {
        error!(error = %e, "Invalid request");
        return Err(Box::new(e) as Box<dyn Error>);
    }

    // ---- Scrape all requested sources concurrently ----
    let timeout = Duration::from_secs(args.timeout_secs);
    let (merged_jobs, reports) = orchestrator::scrape_many(
        &registry,
        &args.sources,
        &args.query,
        &args.location,
        args.limit,
        timeout,
    )
    .await;

    for (source, report) in &reports {
        if report.success {
            info!(%source, jobs_found = report.jobs_found, "Source succeeded");
        } else {
            warn!(
                %source,
                error = report.error.as_deref().unwrap_or("unknown"),
                "Source failed"
            );
        }
    }
    info!(total = merged_jobs.len(), "Merged and deduplicated postings");

    // ---- Classify and aggregate skill mentions ----
    let descriptions = merged_jobs
        .iter()
        .filter(|job| !job.description.is_empty())
        .map(|job| job.description.as_str());
    let profile = aggregator::aggregate(descriptions);
    let top_skills = aggregator::top_n(&profile, args.top);

    print!("{}", text::render_top_skills(&top_skills));

    // ---- Fold new postings into the corpus ----
    if args.no_save {
        info!("Skipping corpus update (--no-save)");
    } else if merged_jobs.is_empty() {
        info!("No new postings, corpus left untouched");
    } else {
        let store = CorpusStore::new(&args.corpus_path);
        let existing = match store.load() {
            Ok(existing) => existing,
            Err(e) => {
                warn!(error = %e, path = %args.corpus_path, "Corpus unreadable, starting empty");
                Vec::new()
            }
        };
        let combined = corpus::merge(existing, merged_jobs.clone());
        store.save(&combined)?;
        info!(count = combined.len(), path = %args.corpus_path, "Corpus updated");
    }

    // ---- Optional JSON run report ----
    if let Some(report_path) = &args.json_report {
        let report = RunReport {
            query: args.query.clone(),
            location: args.location.clone(),
            sources_requested: args.sources.clone(),
            results_by_source: reports,
            total_jobs_found: merged_jobs.len(),
            jobs: merged_jobs,
            skills: top_skills,
        };
        if let Err(e) = json::write_report(&report, Path::new(report_path)).await {
            error!(path = %report_path, error = %e, "Failed writing JSON run report");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
