use std::path::PathBuf;

use cayley::{ConfigError, TableError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: invalid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("writing output: {0}")]
    Output(#[from] std::io::Error),
    #[error("multiplication table defect: {0}")]
    Table(#[from] TableError),
    #[error("grid config: {0}")]
    Config(#[from] ConfigError),
    #[error("could not determine a configuration directory (use --config-dir)")]
    NoConfigDir,
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        CliError::Json {
            path: path.into(),
            source,
        }
    }
}
