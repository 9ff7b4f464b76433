//! Tagged question records and the normalization rules applied to them
//!
//! Fields keep whatever loosely typed value the loader produced (string,
//! number, boolean or absent). Every report reads them through the accessors
//! below, so whitespace trimming and absence defaults live in one place.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Label used when an intent or complexity is missing
pub const UNKNOWN: &str = "unknown";

/// Label used when a learning path is missing
pub const NO_PATH: &str = "none";

/// Learning path values that mean "no path"; compared post-trim, case-sensitive
const PATH_SENTINELS: &[&str] = &["none", "null"];

/// One logged question
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default)]
    pub session_id: Value,
    #[serde(default)]
    pub question: Value,
    #[serde(default)]
    pub user_intent: Value,
    #[serde(default)]
    pub question_complexity: Value,
    #[serde(default)]
    pub learning_path: Value,
    #[serde(default)]
    pub has_follow_up_questions: Value,
    #[serde(default)]
    pub has_difficulty: Value,
    #[serde(default)]
    pub difficulty_type: Value,
}

/// Shared truthiness rule for boolean-like columns.
///
/// Only a native `true` or the literal string `"True"` count; anything else,
/// including `"true"`, `1` or an absent value, is false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "True",
        _ => false,
    }
}

/// Render a scalar cell as text. Absent values and containers yield `None`.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Integer rendering of a number whose value has no fractional part
fn integral_text(n: &Number) -> Option<String> {
    if n.is_i64() || n.is_u64() {
        return Some(n.to_string());
    }
    let f = n.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < I64_EXACT_LIMIT {
        Some((f as i64).to_string())
    } else {
        None
    }
}

/// Beyond 2^53 not every integer is representable as an `f64`
const I64_EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;

impl QuestionRecord {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Value::String(session_id.into()),
            ..Default::default()
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Value::String(question.into());
        self
    }

    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.user_intent = Value::String(intent.into());
        self
    }

    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.question_complexity = Value::String(complexity.into());
        self
    }

    pub fn with_learning_path(mut self, path: impl Into<String>) -> Self {
        self.learning_path = Value::String(path.into());
        self
    }

    pub fn with_follow_up(mut self, value: impl Into<Value>) -> Self {
        self.has_follow_up_questions = value.into();
        self
    }

    pub fn with_difficulty(mut self, value: impl Into<Value>) -> Self {
        self.has_difficulty = value.into();
        self
    }

    pub fn with_difficulty_type(mut self, kind: impl Into<String>) -> Self {
        self.difficulty_type = Value::String(kind.into());
        self
    }

    /// Grouping key. Missing and empty identifiers share the empty key.
    ///
    /// Integral numbers are keyed without a fraction, so `1` and `1.0` are
    /// the same session.
    pub fn session_key(&self) -> String {
        match &self.session_id {
            Value::Number(n) => integral_text(n).unwrap_or_else(|| n.to_string()),
            other => cell_text(other).unwrap_or_default(),
        }
    }

    /// Question text, if the cell holds any
    pub fn question_text(&self) -> Option<String> {
        cell_text(&self.question)
    }

    /// Intent label, `"unknown"` when absent or empty
    pub fn intent(&self) -> String {
        match cell_text(&self.user_intent) {
            Some(s) if !s.is_empty() => s,
            _ => UNKNOWN.to_string(),
        }
    }

    /// Complexity label, trimmed, `"unknown"` when absent or blank
    pub fn complexity(&self) -> String {
        match cell_text(&self.question_complexity) {
            Some(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => UNKNOWN.to_string(),
        }
    }

    /// Learning path label, trimmed, `"none"` when absent.
    ///
    /// An empty string is kept as-is and counts as a real path.
    pub fn learning_path(&self) -> String {
        cell_text(&self.learning_path)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| NO_PATH.to_string())
    }

    /// The learning path, or `None` when it is one of the sentinels
    pub fn tracked_path(&self) -> Option<String> {
        let path = self.learning_path();
        if PATH_SENTINELS.contains(&path.as_str()) {
            None
        } else {
            Some(path)
        }
    }

    pub fn has_follow_up(&self) -> bool {
        is_truthy(&self.has_follow_up_questions)
    }

    pub fn has_difficulty(&self) -> bool {
        is_truthy(&self.has_difficulty)
    }

    /// Difficulty type, trimmed; `None` when absent or blank
    pub fn difficulty_kind(&self) -> Option<String> {
        cell_text(&self.difficulty_type)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
