//! Terminal rendering of the ranked skills breakdown.

use std::fmt::Write;

use crate::skills::aggregator::TopSkills;
use crate::skills::lexicon::Category;

/// Render the top-N breakdown as plain text, one block per category.
pub fn render_top_skills(skills: &TopSkills) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let entries = match category {
            Category::Dev => &skills.dev,
            Category::Cloud => &skills.cloud,
            Category::Soft => &skills.soft,
        };
        let _ = writeln!(out, "Top {}", category.as_str());
        if entries.is_empty() {
            let _ = writeln!(out, "  (nothing found)");
        }
        for (term, count) in entries {
            let _ = writeln!(out, "  {term}: {count}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_terms_per_category() {
        let skills = TopSkills {
            dev: vec![("react".to_string(), 3), ("vue".to_string(), 1)],
            cloud: vec![("aws".to_string(), 2)],
            soft: vec![],
        };
        let rendered = render_top_skills(&skills);
        assert!(rendered.contains("Top dev\n  react: 3\n  vue: 1"));
        assert!(rendered.contains("Top cloud\n  aws: 2"));
        assert!(rendered.contains("Top soft\n  (nothing found)"));
    }
}
