//! Follow-up and difficulty rates

use crate::record::QuestionRecord;
use crate::sessions::group_sessions;
use crate::tally::{percentage, Tally};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FollowUpSummary {
    pub with_follow_up: usize,
    pub without_follow_up: usize,
}

impl FollowUpSummary {
    pub fn total(&self) -> usize {
        self.with_follow_up + self.without_follow_up
    }

    /// Percent of questions that prompted a follow-up; `None` with no records
    pub fn rate(&self) -> Option<f64> {
        percentage(self.with_follow_up, self.total())
    }
}

pub fn follow_up_summary(records: &[QuestionRecord]) -> FollowUpSummary {
    let with_follow_up = records.iter().filter(|r| r.has_follow_up()).count();
    FollowUpSummary {
        with_follow_up,
        without_follow_up: records.len() - with_follow_up,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyAnalysis {
    /// Occurrences per difficulty type, descending
    pub types: Vec<DifficultyTypeCount>,
    /// Sessions with at least one difficult question, first-appearance order
    pub sessions_with_difficulty: Vec<String>,
    pub total_sessions: usize,
    /// Percent of sessions with a difficulty; `None` with no sessions
    pub rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTypeCount {
    pub name: String,
    pub count: usize,
}

pub fn difficulty_analysis(records: &[QuestionRecord]) -> DifficultyAnalysis {
    let kinds: Vec<String> = records
        .iter()
        .filter_map(QuestionRecord::difficulty_kind)
        .collect();
    let tally: Tally = kinds.iter().map(String::as_str).collect();
    let types = tally
        .ranked()
        .into_iter()
        .map(|(name, count)| DifficultyTypeCount { name, count })
        .collect();

    let mut seen = HashSet::new();
    let sessions_with_difficulty: Vec<String> = records
        .iter()
        .filter(|r| r.has_difficulty())
        .map(QuestionRecord::session_key)
        .filter(|key| seen.insert(key.clone()))
        .collect();

    let total_sessions = group_sessions(records).len();
    let rate = percentage(sessions_with_difficulty.len(), total_sessions);

    tracing::debug!(
        types = tally.len(),
        difficult_sessions = sessions_with_difficulty.len(),
        total_sessions,
        "difficulty analysis"
    );

    DifficultyAnalysis {
        types,
        sessions_with_difficulty,
        total_sessions,
        rate,
    }
}
