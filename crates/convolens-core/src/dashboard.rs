//! All reports bundled for a single render

use crate::config::ReportConfig;
use crate::crosstab::{path_intent_crosstab, PathIntentRow};
use crate::distribution::{
    complexity_distribution, intent_distribution, learning_path_distribution, CategoryShare,
};
use crate::engagement::{difficulty_analysis, follow_up_summary, DifficultyAnalysis, FollowUpSummary};
use crate::examples::{select_examples, ExampleSelection};
use crate::record::QuestionRecord;
use crate::sessions::{session_analysis, SessionAnalysis};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Headline numbers shown above the charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_questions: usize,
    pub total_sessions: usize,
    pub median_questions_per_session: Option<f64>,
    pub follow_up_rate: Option<f64>,
    pub difficulty_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub sessions: SessionAnalysis,
    pub intents: Vec<CategoryShare>,
    pub complexity: Vec<CategoryShare>,
    pub learning_paths: Vec<CategoryShare>,
    pub path_intents: Vec<PathIntentRow>,
    pub follow_ups: FollowUpSummary,
    pub difficulty: DifficultyAnalysis,
    pub examples: ExampleSelection,
}

impl Dashboard {
    pub fn build<R: Rng>(records: &[QuestionRecord], config: &ReportConfig, rng: &mut R) -> Self {
        let sessions = session_analysis(records);
        let follow_ups = follow_up_summary(records);
        let difficulty = difficulty_analysis(records);

        let summary = Summary {
            total_questions: records.len(),
            total_sessions: sessions.total_sessions,
            median_questions_per_session: sessions.median_questions,
            follow_up_rate: follow_ups.rate(),
            difficulty_rate: difficulty.rate,
        };

        tracing::info!(
            questions = summary.total_questions,
            sessions = summary.total_sessions,
            "dashboard built"
        );

        Self {
            generated_at: Utc::now(),
            summary,
            intents: intent_distribution(records),
            complexity: complexity_distribution(records),
            learning_paths: learning_path_distribution(records),
            path_intents: path_intent_crosstab(records),
            examples: select_examples(records, config, rng),
            sessions,
            follow_ups,
            difficulty,
        }
    }
}
