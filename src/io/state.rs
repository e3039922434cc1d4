use std::fs;
use std::path::Path;

use indexmap::IndexMap;

/// On-disk layout of the state file: namespace → id → expanded. Namespacing
/// lets independent trees share one file without colliding.
type StateFile = IndexMap<String, IndexMap<String, bool>>;

/// Read one namespace's expansion map from the state file.
/// Missing or corrupt files read as `None`.
pub fn read_expansion(path: &Path, namespace: &str) -> Option<IndexMap<String, bool>> {
    let content = fs::read_to_string(path).ok()?;
    let file: StateFile = serde_json::from_str(&content).ok()?;
    file.get(namespace).cloned()
}

/// Write one namespace's expansion map, preserving other namespaces.
/// A corrupt existing file is replaced rather than appended to.
pub fn write_expansion(
    path: &Path,
    namespace: &str,
    expanded: &IndexMap<String, bool>,
) -> Result<(), std::io::Error> {
    let mut file: StateFile = fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default();
    file.insert(namespace.to_string(), expanded.clone());
    let content = serde_json::to_string_pretty(&file)?;
    fs::write(path, content)
}
