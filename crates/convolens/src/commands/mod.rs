pub mod examples;
pub mod init;
pub mod report;
pub mod sections;
pub mod version;

use crate::cli::SampleArgs;
use anyhow::Context;
use convolens_core::{QuestionRecord, ReportConfig};
use convolens_dataset::{load_config, load_records, Paths};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

pub(crate) fn load_dataset(file: &Path) -> anyhow::Result<Vec<QuestionRecord>> {
    load_records(file).with_context(|| format!("loading dataset {}", file.display()))
}

/// Config from `--config`, else from the data home, else defaults
pub(crate) fn resolve_config(sample: &SampleArgs) -> anyhow::Result<ReportConfig> {
    let path = match &sample.config {
        Some(path) => path.clone(),
        None => Paths::new()?.config_file(),
    };
    load_config(&path).with_context(|| format!("loading config {}", path.display()))
}

pub(crate) fn sampler(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
