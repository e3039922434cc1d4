use std::fs;
use std::path::Path;

use crate::model::config::SummitConfig;

use super::item_io::LoadError;

/// Read summit.toml from the working directory. A missing file means
/// defaults; a file that exists but doesn't parse is a real error.
pub fn read_config(dir: &Path) -> Result<SummitConfig, LoadError> {
    let config_path = dir.join("summit.toml");
    if !config_path.exists() {
        return Ok(SummitConfig::default());
    }
    let config_text = fs::read_to_string(&config_path).map_err(|e| LoadError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    toml::from_str(&config_text).map_err(|e| LoadError::ConfigParseError {
        path: config_path,
        source: e,
    })
}
