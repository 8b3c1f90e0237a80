//! Preference store backed by a small JSON object on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cayley::PreferenceStore;
use tracing::debug;

use crate::error::CliError;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| CliError::json(&path, e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(CliError::io(&path, e)),
        };
        debug!(path = %path.display(), entries = entries.len(), "opened preference store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| CliError::json(&self.path, e))?;
        fs::write(&self.path, raw).map_err(|e| CliError::io(&self.path, e))
    }
}

impl PreferenceStore for FileStore {
    type Error = CliError;

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CliError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
