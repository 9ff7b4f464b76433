//! Learning path x intent cross-tabulation

use crate::record::QuestionRecord;
use crate::tally::{percentage, Tally};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentCount {
    pub intent: String,
    pub count: usize,
}

/// Intent breakdown for one learning path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathIntentRow {
    pub path: String,
    pub total: usize,
    pub dominant_intent: String,
    pub dominant_count: usize,
    /// Dominant intent's share of `total`, one decimal
    pub dominant_percentage: f64,
    /// Every intent seen on this path, in first-occurrence order
    pub intents: Vec<IntentCount>,
}

/// Cross-tabulate intents per learning path, largest paths first.
///
/// Records without a learning path (`"none"`/`"null"`) are skipped. When two
/// intents tie for the highest count on a path, the one that appeared first
/// among that path's records is reported as dominant.
pub fn path_intent_crosstab(records: &[QuestionRecord]) -> Vec<PathIntentRow> {
    let mut order: Vec<String> = Vec::new();
    let mut tallies: HashMap<String, Tally> = HashMap::new();

    for record in records {
        let Some(path) = record.tracked_path() else {
            continue;
        };
        let tally = tallies.entry(path.clone()).or_insert_with(|| {
            order.push(path.clone());
            Tally::new()
        });
        tally.add(&record.intent());
    }

    let mut rows: Vec<PathIntentRow> = order
        .into_iter()
        .filter_map(|path| {
            let tally = tallies.remove(&path)?;
            let total = tally.total();
            let (dominant_intent, dominant_count) = tally
                .leader()
                .map(|(intent, count)| (intent.to_string(), count))?;
            Some(PathIntentRow {
                dominant_percentage: percentage(dominant_count, total).unwrap_or(0.0),
                intents: tally
                    .iter()
                    .map(|(intent, count)| IntentCount {
                        intent: intent.to_string(),
                        count,
                    })
                    .collect(),
                path,
                total,
                dominant_intent,
                dominant_count,
            })
        })
        .collect();

    rows.sort_by_key(|row| std::cmp::Reverse(row.total));
    tracing::debug!(paths = rows.len(), "path intent crosstab");
    rows
}
