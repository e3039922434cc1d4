use std::fs;
use std::path::{Path, PathBuf};

use crate::model::item::WorkItem;

/// Error type for snapshot and config loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no item snapshot at {0} (is the host writing one?)")]
    NoSnapshot(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not parse {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load the fully-resolved work-item tree the host wrote for us.
/// The snapshot is a JSON array of root items.
pub fn load_items(path: &Path) -> Result<Vec<WorkItem>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NoSnapshot(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| LoadError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}
