//! Category distributions: intent, complexity and learning path

use crate::record::QuestionRecord;
use crate::tally::{percentage, Tally};
use serde::{Deserialize, Serialize};

/// One slice of a distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub count: usize,
    /// Percent of the distribution's denominator, one decimal
    pub percentage: f64,
}

/// Rank a tally into shares of `denominator`, descending by count
fn shares(tally: &Tally, denominator: usize) -> Vec<CategoryShare> {
    tally
        .ranked()
        .into_iter()
        .map(|(name, count)| CategoryShare {
            percentage: percentage(count, denominator).unwrap_or(0.0),
            name,
            count,
        })
        .collect()
}

/// Share of every normalized intent over all records
pub fn intent_distribution(records: &[QuestionRecord]) -> Vec<CategoryShare> {
    let labels: Vec<String> = records.iter().map(QuestionRecord::intent).collect();
    let tally: Tally = labels.iter().map(String::as_str).collect();
    tracing::debug!(categories = tally.len(), "intent distribution");
    shares(&tally, records.len())
}

/// Share of every normalized complexity level over all records
pub fn complexity_distribution(records: &[QuestionRecord]) -> Vec<CategoryShare> {
    let labels: Vec<String> = records.iter().map(QuestionRecord::complexity).collect();
    let tally: Tally = labels.iter().map(String::as_str).collect();
    tracing::debug!(categories = tally.len(), "complexity distribution");
    shares(&tally, records.len())
}

/// Share of every learning path among records that have one.
///
/// Records whose path is `"none"`/`"null"` are left out of both the counts
/// and the denominator.
pub fn learning_path_distribution(records: &[QuestionRecord]) -> Vec<CategoryShare> {
    let paths: Vec<String> = records.iter().filter_map(QuestionRecord::tracked_path).collect();
    let tally: Tally = paths.iter().map(String::as_str).collect();
    tracing::debug!(
        tracked = paths.len(),
        categories = tally.len(),
        "learning path distribution"
    );
    shares(&tally, paths.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_intents(intents: &[&str]) -> Vec<QuestionRecord> {
        intents
            .iter()
            .map(|i| QuestionRecord::new("s1").with_intent(*i))
            .collect()
    }

    #[test]
    fn test_intent_sorted_descending() {
        let records = with_intents(&["greeting", "problem_solving", "problem_solving"]);
        let dist = intent_distribution(&records);
        assert_eq!(dist[0].name, "problem_solving");
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[0].percentage, 66.7);
        assert_eq!(dist[1].name, "greeting");
        assert_eq!(dist[1].percentage, 33.3);
    }

    #[test]
    fn test_intent_ties_keep_first_occurrence() {
        let records = with_intents(&["validation", "off_topic", "clarification"]);
        let names: Vec<_> = intent_distribution(&records)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["validation", "off_topic", "clarification"]);
    }

    #[test]
    fn test_intent_percentages_sum_to_100() {
        let records = with_intents(&[
            "a", "b", "c", "a", "b", "d", "e", "a", "f", "g", "b",
        ]);
        let dist = intent_distribution(&records);
        let sum: f64 = dist.iter().map(|s| s.percentage).sum();
        let tolerance = 0.1 * dist.len() as f64;
        assert!((sum - 100.0).abs() <= tolerance, "sum was {}", sum);
    }

    #[test]
    fn test_missing_intent_is_unknown() {
        let records = vec![QuestionRecord::new("s1"), QuestionRecord::new("s1").with_intent("")];
        let dist = intent_distribution(&records);
        assert_eq!(dist.len(), 1);
        assert_eq!(dist[0].name, "unknown");
        assert_eq!(dist[0].percentage, 100.0);
    }

    #[test]
    fn test_complexity_trims_and_defaults() {
        let records = vec![
            QuestionRecord::new("s1").with_complexity("beginner "),
            QuestionRecord::new("s1").with_complexity(" beginner"),
            QuestionRecord::new("s1"),
            QuestionRecord::new("s1").with_complexity("advanced"),
        ];
        let dist = complexity_distribution(&records);
        assert_eq!(dist[0].name, "beginner");
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[0].percentage, 50.0);
        assert_eq!(dist[1].name, "unknown");
        assert_eq!(dist[2].name, "advanced");
    }

    #[test]
    fn test_learning_path_excludes_sentinels_from_denominator() {
        let records = vec![
            QuestionRecord::new("s1").with_learning_path("A"),
            QuestionRecord::new("s1").with_learning_path("none"),
            QuestionRecord::new("s1").with_learning_path("B"),
            QuestionRecord::new("s1").with_learning_path("B"),
        ];
        let dist = learning_path_distribution(&records);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].name, "B");
        assert_eq!(dist[0].percentage, 66.7);
        assert_eq!(dist[1].name, "A");
        assert_eq!(dist[1].percentage, 33.3);
    }

    #[test]
    fn test_learning_path_all_sentinels() {
        let records = vec![
            QuestionRecord::new("s1").with_learning_path("null"),
            QuestionRecord::new("s1"),
        ];
        assert!(learning_path_distribution(&records).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(intent_distribution(&[]).is_empty());
        assert!(complexity_distribution(&[]).is_empty());
        assert!(learning_path_distribution(&[]).is_empty());
    }
}
