use std::path::PathBuf;
use thiserror::Error;

/// Storage operation error.
///
/// Only writes surface errors; reads are tolerant by contract and report
/// problems as diagnostics instead (absent or corrupt data reads as
/// "nothing stored").
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to {operation} store file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PersistError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistError>;
