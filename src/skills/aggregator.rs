//! Cross-document aggregation of classification results.
//!
//! [`aggregate`] classifies each document and sums counts per category in
//! encounter order; summation is commutative, so order only influences the
//! first-seen tiebreak used by [`top_n`], never the final sums.

use serde::Serialize;
use tracing::debug;

use crate::skills::TermCounts;
use crate::skills::classifier::{self, ClassificationResult};
use crate::skills::lexicon::Category;

/// Skill counts accumulated across a document set.
///
/// Built fresh per run and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateProfile {
    pub dev: TermCounts,
    pub cloud: TermCounts,
    pub soft: TermCounts,
}

impl AggregateProfile {
    /// The accumulated counter for one category.
    pub fn counts(&self, category: Category) -> &TermCounts {
        match category {
            Category::Dev => &self.dev,
            Category::Cloud => &self.cloud,
            Category::Soft => &self.soft,
        }
    }

    /// Fold one document's classification into the profile.
    pub fn absorb(&mut self, result: &ClassificationResult) {
        self.dev.merge(&result.dev);
        self.cloud.merge(&result.cloud);
        self.soft.merge(&result.soft);
    }
}

/// The ranked top-N view of an [`AggregateProfile`], one ordered list of
/// `(term, count)` pairs per category. This is the shape serialized into
/// the run report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopSkills {
    pub dev: Vec<(String, u64)>,
    pub cloud: Vec<(String, u64)>,
    pub soft: Vec<(String, u64)>,
}

/// Classify every document and sum the counts per category.
pub fn aggregate<'a, I>(documents: I) -> AggregateProfile
where
    I: IntoIterator<Item = &'a str>,
{
    let mut profile = AggregateProfile::default();
    let mut doc_count = 0usize;
    for document in documents {
        profile.absorb(&classifier::classify(document));
        doc_count += 1;
    }
    debug!(
        documents = doc_count,
        dev_terms = profile.dev.len(),
        cloud_terms = profile.cloud.len(),
        soft_terms = profile.soft.len(),
        "Aggregated document classifications"
    );
    profile
}

/// The `n` highest-count terms per category, count descending, ties broken
/// by first-seen order during aggregation. `n` beyond the available term
/// count is clamped, never an error.
pub fn top_n(profile: &AggregateProfile, n: usize) -> TopSkills {
    TopSkills {
        dev: profile.dev.most_common(n),
        cloud: profile.cloud.most_common(n),
        soft: profile.soft.most_common(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_scenario_two_documents() {
        let profile = aggregate(["React, AWS, Comunicação", "react AWS teamwork"]);
        assert_eq!(profile.dev.get("react"), 2);
        assert_eq!(profile.cloud.get("aws"), 2);
        assert_eq!(profile.soft.get("comunicação"), 1);
        assert_eq!(profile.soft.get("teamwork"), 1);
        assert_eq!(profile.dev.len(), 1);
        assert_eq!(profile.cloud.len(), 1);
        assert_eq!(profile.soft.len(), 2);
    }

    #[test]
    fn test_aggregate_empty_input() {
        let profile = aggregate(Vec::<&str>::new());
        assert!(profile.dev.is_empty());
        assert!(profile.cloud.is_empty());
        assert!(profile.soft.is_empty());
    }

    #[test]
    fn test_aggregation_linearity() {
        // Summed per-document counts must equal the aggregate counts.
        let docs = ["react and aws", "react, docker and react", "teamwork aws"];
        let profile = aggregate(docs);

        let mut independent = AggregateProfile::default();
        for doc in docs {
            independent.absorb(&classifier::classify(doc));
        }
        assert_eq!(profile, independent);
        assert_eq!(profile.dev.get("react"), 3);
        assert_eq!(profile.cloud.get("aws"), 2);
        assert_eq!(profile.cloud.get("docker"), 1);
    }

    #[test]
    fn test_top_n_bounds_and_order() {
        let profile = aggregate(["vue react react svelte", "react svelte"]);
        let top = top_n(&profile, 2);
        assert_eq!(top.dev.len(), 2);
        assert_eq!(top.dev[0], ("react".to_string(), 3));
        assert_eq!(top.dev[1], ("svelte".to_string(), 2));
    }

    #[test]
    fn test_top_n_tie_breaks_on_first_seen_order() {
        let profile = aggregate(["vue", "svelte", "angular"]);
        let top = top_n(&profile, 10);
        assert_eq!(
            top.dev,
            vec![
                ("vue".to_string(), 1),
                ("svelte".to_string(), 1),
                ("angular".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_n_clamps_out_of_range_n() {
        let profile = aggregate(["react"]);
        let top = top_n(&profile, 50);
        assert_eq!(top.dev.len(), 1);
        assert!(top.cloud.is_empty());
    }

    #[test]
    fn test_top_n_never_invents_terms() {
        let profile = aggregate(["react aws"]);
        let top = top_n(&profile, 10);
        for (term, count) in top.dev.iter().chain(&top.cloud).chain(&top.soft) {
            assert!(*count > 0);
            assert!(profile.dev.get(term) + profile.cloud.get(term) + profile.soft.get(term) > 0);
        }
    }

    #[test]
    fn test_top_skills_serializes_as_pair_arrays() {
        let profile = aggregate(["react react aws"]);
        let json = serde_json::to_value(top_n(&profile, 5)).unwrap();
        assert_eq!(json["dev"][0][0], "react");
        assert_eq!(json["dev"][0][1], 2);
        assert_eq!(json["cloud"][0][0], "aws");
    }
}
