//! Session grouping and questions-per-session statistics

use crate::record::QuestionRecord;
use crate::tally::{round_to, Tally};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of sessions that asked exactly `questions` questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLengthBucket {
    pub questions: usize,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAnalysis {
    pub total_sessions: usize,
    /// Question count per session, sessions in first-appearance order
    pub questions_per_session: Vec<usize>,
    /// Ascending by question count
    pub distribution: Vec<SessionLengthBucket>,
    /// Two decimals; `None` when there are no sessions
    pub median_questions: Option<f64>,
}

/// Group records by session key, preserving first-appearance order
pub fn group_sessions(records: &[QuestionRecord]) -> Tally {
    let keys: Vec<String> = records.iter().map(|r| r.session_key()).collect();
    keys.iter().map(String::as_str).collect()
}

pub fn session_analysis(records: &[QuestionRecord]) -> SessionAnalysis {
    let groups = group_sessions(records);
    let questions_per_session: Vec<usize> = groups.iter().map(|(_, count)| count).collect();

    let mut buckets: BTreeMap<usize, usize> = BTreeMap::new();
    for &count in &questions_per_session {
        *buckets.entry(count).or_default() += 1;
    }
    let distribution = buckets
        .into_iter()
        .map(|(questions, sessions)| SessionLengthBucket {
            questions,
            sessions,
        })
        .collect();

    let median_questions = median(&questions_per_session).map(|m| round_to(m, 2));

    tracing::debug!(
        records = records.len(),
        sessions = groups.len(),
        "session analysis"
    );

    SessionAnalysis {
        total_sessions: groups.len(),
        questions_per_session,
        distribution,
        median_questions,
    }
}

/// Median with the even/odd rule; `None` for an empty slice
pub fn median(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) as f64 / 2.0)
    } else {
        Some(sorted[mid] as f64)
    }
}
