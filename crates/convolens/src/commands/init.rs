use anyhow::Context;
use convolens_core::ReportConfig;
use convolens_dataset::{save_config, Paths};
use std::path::Path;

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let config_path = paths.config_file();

    if write_default_config(&config_path)? {
        println!("✓ Wrote default config to {}", config_path.display());
    } else {
        println!("Config already exists at {}", config_path.display());
    }
    Ok(())
}

/// Returns false when a config file is already present
fn write_default_config(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_config(path, &ReportConfig::default())
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "created config");
    Ok(true)
}
