//! Skills extraction: lexicon, per-document classifier, and aggregator.
//!
//! The pipeline is leaf-first:
//!
//! 1. [`lexicon`]: static canonical term sets (dev stack, cloud/DevOps,
//!    soft skills) plus a one-hop alias table normalizing surface variants
//! 2. [`classifier`]: tokenizes one document and counts canonical terms
//!    per category
//! 3. [`aggregator`]: sums classifications across many documents and
//!    produces ranked top-N views
//!
//! All state is per-call and threaded through explicitly; nothing here
//! mutates process-wide state, so aggregation calls are independent and
//! testable in isolation.

pub mod aggregator;
pub mod classifier;
pub mod lexicon;

use std::collections::HashMap;

/// An insertion-ordered term counter.
///
/// Counts occurrences per canonical term while remembering the order in
/// which terms were first seen. Ranking ties in [`aggregator::top_n`] break
/// on that first-seen order, so equal-count terms come out in the order the
/// documents introduced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl TermCounts {
    /// Add `n` occurrences of `term`.
    pub fn add(&mut self, term: &str, n: u64) {
        if n == 0 {
            return;
        }
        match self.counts.get_mut(term) {
            Some(count) => *count += n,
            None => {
                self.counts.insert(term.to_string(), n);
                self.order.push(term.to_string());
            }
        }
    }

    /// Add a single occurrence of `term`.
    pub fn bump(&mut self, term: &str) {
        self.add(term, 1);
    }

    /// The count recorded for `term`, zero if absent.
    pub fn get(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(term, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order.iter().map(|term| (term.as_str(), self.counts[term]))
    }

    /// Fold another counter into this one, preserving this counter's
    /// first-seen ordering for terms already present.
    pub fn merge(&mut self, other: &TermCounts) {
        for (term, count) in other.iter() {
            self.add(term, count);
        }
    }

    /// The `n` highest-count terms, count descending, first-seen order as
    /// tiebreak. `n` beyond the available term count is clamped.
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut pairs: Vec<(String, u64)> =
            self.iter().map(|(term, count)| (term.to_string(), count)).collect();
        // sort_by is stable, so insertion order survives equal counts
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs.truncate(n);
        pairs
    }
}
