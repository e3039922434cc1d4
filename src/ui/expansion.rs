use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::io::state::{read_expansion, write_expansion};

/// Persisted per-node expand/collapse state, shared by every consumer that
/// reads the same file and namespace.
///
/// An id that was never toggled is expanded. Every mutation persists
/// immediately; a failed write falls back to the in-memory state for the
/// session rather than surfacing an error to the projection.
#[derive(Debug, Clone)]
pub struct ExpansionStore {
    namespace: String,
    expanded: IndexMap<String, bool>,
    /// `None` = in-memory only (tests, hosts that persist elsewhere)
    state_path: Option<PathBuf>,
}

impl ExpansionStore {
    /// A store that never touches disk
    pub fn in_memory(namespace: impl Into<String>) -> Self {
        ExpansionStore {
            namespace: namespace.into(),
            expanded: IndexMap::new(),
            state_path: None,
        }
    }

    /// Load the store from the state file; a missing or unreadable file
    /// starts empty
    pub fn load(state_path: &Path, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let expanded = read_expansion(state_path, &namespace).unwrap_or_default();
        ExpansionStore {
            namespace,
            expanded,
            state_path: Some(state_path.to_path_buf()),
        }
    }

    /// Unseen nodes default open
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(true)
    }

    pub fn toggle(&mut self, id: &str) {
        let next = !self.is_expanded(id);
        self.expanded.insert(id.to_string(), next);
        self.persist();
    }

    /// Expand every id currently in the tree; ids not listed (including
    /// stale ones from earlier snapshots) are left untouched
    pub fn expand_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.set_all(ids, true);
    }

    /// Collapse every id currently in the tree; stale ids untouched
    pub fn collapse_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.set_all(ids, false);
    }

    /// Record the tree's ids on first load without disturbing saved state
    pub fn seed<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let mut changed = false;
        for id in ids {
            if !self.expanded.contains_key(id) {
                self.expanded.insert(id.to_string(), true);
                changed = true;
            }
        }
        if changed {
            self.persist();
        }
    }

    fn set_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>, value: bool) {
        for id in ids {
            self.expanded.insert(id.to_string(), value);
        }
        self.persist();
    }

    /// Storage failures are absorbed here; the in-memory map stays correct
    fn persist(&self) {
        if let Some(path) = &self.state_path {
            let _ = write_expansion(path, &self.namespace, &self.expanded);
        }
    }
}
