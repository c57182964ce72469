//! User configuration
//!
//! Read from `<config dir>/faculty-onboarding/config.toml` (or a file given
//! with `--config`). Every key is optional; a missing file means defaults.
//!
//! ```toml
//! log_level = "debug"
//!
//! [submission]
//! pretty_json = true
//!
//! [ui]
//! show_step_ids = false
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "faculty-onboarding";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "faculty-onboarding.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
    pub submission: SubmissionConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Pretty-print the submitted record in the log
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show step ids next to step names in the header
    pub show_step_ids: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            submission: SubmissionConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when None
    ///
    /// An explicitly given file must exist; the default one may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// `<config dir>/faculty-onboarding/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Where the log goes while the terminal UI owns the screen
///
/// Creates the directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    Ok(dir.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.submission.pretty_json);
        assert!(!config.ui.show_step_ids);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("[submission]\npretty_json = true\n").unwrap();
        assert!(config.submission.pretty_json);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n[ui]\nshow_step_ids = true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.ui.show_step_ids);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = [").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }
}
