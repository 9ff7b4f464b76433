use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convolens")]
#[command(version)]
#[command(about = "Analytics over tagged chatbot conversation logs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Dataset input shared by every report command
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Tagged question dataset (.csv, or .jsonl/.ndjson)
    pub file: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Options for commands that pick example questions
#[derive(Args, Debug, Clone, Default)]
pub struct SampleArgs {
    /// Seed for example selection (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file (defaults to config.json in the data home)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default config.json into the data home
    Init,

    /// Full dashboard: every report plus headline numbers
    Report {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        sample: SampleArgs,
    },

    /// Session counts and questions-per-session distribution
    Sessions(DataArgs),

    /// Intent distribution
    Intents(DataArgs),

    /// Question complexity distribution
    Complexity(DataArgs),

    /// Learning path distribution
    Paths(DataArgs),

    /// Dominant intent per learning path
    Crosstab(DataArgs),

    /// Follow-up question rate
    Followups(DataArgs),

    /// Difficulty types and rate
    Difficulty(DataArgs),

    /// Example questions per intent and complexity level
    Examples {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        sample: SampleArgs,
    },

    /// Print version information
    Version,
}
