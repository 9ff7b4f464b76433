//! Report configuration

use serde::{Deserialize, Serialize};

/// Settings for the example-question panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Intents that get an example question
    #[serde(default = "default_example_intents")]
    pub example_intents: Vec<String>,

    /// Complexity levels that get an example question
    #[serde(default = "default_example_complexities")]
    pub example_complexities: Vec<String>,

    /// Pick among at most this many qualifying questions
    #[serde(default = "default_example_pool_size")]
    pub example_pool_size: usize,

    /// Questions must be longer than this many characters
    #[serde(default = "default_min_question_chars")]
    pub min_question_chars: usize,

    /// Shown when no question qualifies
    #[serde(default = "default_fallback_example")]
    pub fallback_example: String,
}

fn default_example_intents() -> Vec<String> {
    ["problem_solving", "knowledge_seeking", "decision_making"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_example_complexities() -> Vec<String> {
    ["beginner", "intermediate", "advanced"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_example_pool_size() -> usize {
    5
}

fn default_min_question_chars() -> usize {
    10
}

fn default_fallback_example() -> String {
    "No example available".to_string()
}

impl ReportConfig {
    pub fn new() -> Self {
        Self {
            example_intents: default_example_intents(),
            example_complexities: default_example_complexities(),
            example_pool_size: default_example_pool_size(),
            min_question_chars: default_min_question_chars(),
            fallback_example: default_fallback_example(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}
