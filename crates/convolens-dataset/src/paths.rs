//! Path resolution for the convolens data home

use std::path::PathBuf;

/// Environment variable that overrides the data home
pub const HOME_ENV: &str = "CONVOLENS_HOME";

/// Resolves standard paths under the data home
#[derive(Debug, Clone)]
pub struct Paths {
    pub home: PathBuf,
}

impl Paths {
    /// `$CONVOLENS_HOME` if set, otherwise `~/.convolens`
    pub fn new() -> std::io::Result<Self> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_home(PathBuf::from(dir)));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::with_home(home.join(".convolens")))
    }

    pub fn with_home(home: PathBuf) -> Self {
        Self { home }
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.home.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_paths_default_home() {
        std::env::remove_var(HOME_ENV);
        let paths = Paths::new().unwrap();
        assert!(paths.home.ends_with(".convolens"));
    }

    #[test]
    #[serial]
    fn test_paths_env_override() {
        let temp = tempfile::TempDir::new().unwrap();
        std::env::set_var(HOME_ENV, temp.path());
        let paths = Paths::new().unwrap();
        std::env::remove_var(HOME_ENV);
        assert_eq!(paths.home, temp.path());
    }

    #[test]
    fn test_config_file() {
        let paths = Paths::with_home(PathBuf::from("/tmp/convolens-test"));
        assert!(paths.config_file().ends_with("convolens-test/config.json"));
    }
}
