//! Per-document skill classification.
//!
//! Lower-cases the input, tokenizes it with a regex that keeps the `+`,
//! `#`, and `.` characters inside tokens (so `c#`, `c++`, and `node.js`
//! survive), resolves each token through the alias table, and counts
//! membership in each lexicon category. Canonical terms the tokenizer
//! would split (multi-word phrases, `styled-components`, `ci/cd`) are
//! matched by a second literal-scan pass over the lowered text.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::skills::TermCounts;
use crate::skills::lexicon::{self, Category};

static TOKENIZER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w+#.]+").unwrap());

/// Per-document classification: one counter per skill category.
///
/// Derived on demand and never persisted. Empty input produces three empty
/// counters, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub dev: TermCounts,
    pub cloud: TermCounts,
    pub soft: TermCounts,
}

impl ClassificationResult {
    /// The counter for one category.
    pub fn counts(&self, category: Category) -> &TermCounts {
        match category {
            Category::Dev => &self.dev,
            Category::Cloud => &self.cloud,
            Category::Soft => &self.soft,
        }
    }

    fn counts_mut(&mut self, category: Category) -> &mut TermCounts {
        match category {
            Category::Dev => &mut self.dev,
            Category::Cloud => &mut self.cloud,
            Category::Soft => &mut self.soft,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dev.is_empty() && self.cloud.is_empty() && self.soft.is_empty()
    }
}

/// Classify one document's free text into per-category term counts.
///
/// Tokens that resolve to no canonical term contribute nothing; duplicates
/// within the document increment the same counter.
pub fn classify(text: &str) -> ClassificationResult {
    let lowered = text.to_lowercase();
    let mut result = ClassificationResult::default();

    for token in TOKENIZER.find_iter(&lowered) {
        let canonical = lexicon::resolve_alias(token.as_str());
        for category in Category::ALL {
            if lexicon::set(category).contains(canonical) {
                result.counts_mut(category).bump(canonical);
            }
        }
    }

    // The tokenizer cannot reconstruct phrases like "material ui", so those
    // are matched by literal scan in addition to the token pass.
    for &(phrase, category) in lexicon::phrases() {
        let hits = lowered.matches(phrase).count();
        if hits > 0 {
            result.counts_mut(category).add(phrase, hits as u64);
        }
    }

    trace!(
        dev = result.dev.len(),
        cloud = result.cloud.len(),
        soft = result.soft.len(),
        "Classified document"
    );
    result
}
