//! CSV-backed corpus store and the persistence merge.
//!
//! The corpus is the full deduplicated set of job records on disk, one CSV
//! row per posting keyed by url (or the title/company/location triple when
//! no url exists). [`merge`] folds freshly scraped postings into the
//! loaded corpus with last-write-wins semantics — deliberately the
//! opposite tie rule of the in-memory multi-source merge, so the stored
//! corpus always reflects the freshest data for a given key.
//!
//! [`CorpusStore::save`] rewrites the file through a temp-and-rename, so
//! the store is never left partially written.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::error::CorpusError;
use crate::models::{JobKey, JobPosting};

/// Handle on the on-disk corpus CSV.
pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CorpusStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all stored records. A corpus that does not exist yet is an
    /// empty corpus, not an error.
    #[instrument(level = "info", skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<JobPosting>, CorpusError> {
        if !self.path.exists() {
            debug!("No corpus file yet, starting empty");
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        info!(count = records.len(), "Loaded corpus");
        Ok(records)
    }

    /// Rewrite the corpus as a whole.
    ///
    /// Serializes into a sibling temp file and renames it over the target,
    /// so a failure mid-write leaves the previous corpus intact.
    #[instrument(level = "info", skip_all, fields(path = %self.path.display(), count = records.len()))]
    pub fn save(&self, records: &[JobPosting]) -> Result<(), CorpusError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension("csv.tmp");
        let mut writer = csv::Writer::from_path(&tmp_path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp_path, &self.path)?;
        info!("Wrote corpus");
        Ok(())
    }
}

/// Fold newly scraped postings into the existing corpus.
///
/// Concatenates existing and new records, then deduplicates by the
/// composite key with the **last** occurrence winning: a fresh record
/// overwrites a stale stored one in place. Records with no formable key
/// are always kept.
pub fn merge(existing: Vec<JobPosting>, new_jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut out: Vec<JobPosting> = Vec::new();
    let mut index: HashMap<JobKey, usize> = HashMap::new();

    for job in existing.into_iter().chain(new_jobs) {
        match job.dedup_key() {
            Some(key) => match index.entry(key) {
                Entry::Occupied(slot) => out[*slot.get()] = job,
                Entry::Vacant(slot) => {
                    slot.insert(out.len());
                    out.push(job);
                }
            },
            None => out.push(job),
        }
    }
    out
}
