mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands};
use commands::sections::Section;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for report output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Report { data, sample } => commands::report::run(&data, &sample),
        Commands::Sessions(data) => commands::sections::run(Section::Sessions, &data),
        Commands::Intents(data) => commands::sections::run(Section::Intents, &data),
        Commands::Complexity(data) => commands::sections::run(Section::Complexity, &data),
        Commands::Paths(data) => commands::sections::run(Section::LearningPaths, &data),
        Commands::Crosstab(data) => commands::sections::run(Section::PathIntents, &data),
        Commands::Followups(data) => commands::sections::run(Section::FollowUps, &data),
        Commands::Difficulty(data) => commands::sections::run(Section::Difficulty, &data),
        Commands::Examples { data, sample } => commands::examples::run(&data, &sample),
        Commands::Version => commands::version::run(),
    }
}
