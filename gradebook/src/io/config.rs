//! Gradebook configuration stored in `gradebook.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "gradebook.toml";

/// Gradebook configuration (TOML).
///
/// Missing fields fall back to the defaults of a fresh checkout.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GradebookConfig {
    /// State file holding students and classrooms.
    pub data_path: PathBuf,

    /// Print the committed state after every mutation.
    pub echo_state: bool,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.json"),
            echo_state: true,
        }
    }
}

impl GradebookConfig {
    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(anyhow!("data_path must not be empty"));
        }
        Ok(())
    }

    /// Apply a command-line override for the state file.
    pub fn with_data_path(mut self, data_path: Option<PathBuf>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        self
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GradebookConfig::default()`.
pub fn load_config(path: &Path) -> Result<GradebookConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = GradebookConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GradebookConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
