//! Example question selection
//!
//! The only report that is not deterministic. Callers pass the random source
//! in, so tests can pin it with a seeded generator.

use crate::config::ReportConfig;
use crate::record::QuestionRecord;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExample {
    pub category: String,
    pub question: String,
    /// True when no record qualified and `question` is the fallback text
    pub is_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleSelection {
    pub by_intent: Vec<CategoryExample>,
    pub by_complexity: Vec<CategoryExample>,
}

/// Pick one example question per configured intent and complexity level
pub fn select_examples<R: Rng>(
    records: &[QuestionRecord],
    config: &ReportConfig,
    rng: &mut R,
) -> ExampleSelection {
    let by_intent = config
        .example_intents
        .iter()
        .map(|intent| pick_example(records, intent, |r| r.intent(), config, rng))
        .collect();
    let by_complexity = config
        .example_complexities
        .iter()
        .map(|level| pick_example(records, level, |r| r.complexity(), config, rng))
        .collect();

    ExampleSelection {
        by_intent,
        by_complexity,
    }
}

fn pick_example<R, F>(
    records: &[QuestionRecord],
    category: &str,
    label: F,
    config: &ReportConfig,
    rng: &mut R,
) -> CategoryExample
where
    R: Rng,
    F: Fn(&QuestionRecord) -> String,
{
    let candidates: Vec<String> = records
        .iter()
        .filter(|r| label(*r) == category)
        .filter_map(QuestionRecord::question_text)
        .filter(|q| q.chars().count() > config.min_question_chars)
        .take(config.example_pool_size.max(1))
        .collect();

    if candidates.is_empty() {
        tracing::debug!(category, "no qualifying example");
        return CategoryExample {
            category: category.to_string(),
            question: config.fallback_example.clone(),
            is_fallback: true,
        };
    }

    let pick = rng.random_range(0..candidates.len());
    CategoryExample {
        category: category.to_string(),
        question: candidates[pick].clone(),
        is_fallback: false,
    }
}
