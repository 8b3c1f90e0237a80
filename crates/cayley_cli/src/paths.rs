//! Cross-platform application paths
//!
//! - Linux: ~/.config/cayley/
//! - Windows: %APPDATA%\cayley\
//! - MacOS: ~/Library/Application Support/cayley/

use std::path::{Path, PathBuf};

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    /// Use `dir` if given, otherwise the platform config directory.
    pub fn new(dir: Option<&Path>) -> Result<Self, CliError> {
        let config_dir = match dir {
            Some(d) => d.to_path_buf(),
            None => dirs::config_dir()
                .ok_or(CliError::NoConfigDir)?
                .join("cayley"),
        };
        Ok(Self { config_dir })
    }

    pub fn preferences_file(&self) -> PathBuf {
        self.config_dir.join("preferences.json")
    }
}
