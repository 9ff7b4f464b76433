//! Aggregation engine for tagged chatbot question logs

mod config;
mod crosstab;
mod dashboard;
mod distribution;
mod engagement;
mod examples;
mod record;
mod sessions;
mod tally;

pub use config::ReportConfig;
pub use crosstab::{path_intent_crosstab, IntentCount, PathIntentRow};
pub use dashboard::{Dashboard, Summary};
pub use distribution::{
    complexity_distribution, intent_distribution, learning_path_distribution, CategoryShare,
};
pub use engagement::{
    difficulty_analysis, follow_up_summary, DifficultyAnalysis, DifficultyTypeCount,
    FollowUpSummary,
};
pub use examples::{select_examples, CategoryExample, ExampleSelection};
pub use record::{is_truthy, QuestionRecord, NO_PATH, UNKNOWN};
pub use sessions::{median, session_analysis, SessionAnalysis, SessionLengthBucket};
pub use tally::{percentage, Tally};
