use serde::{Deserialize, Serialize};

/// Configuration from summit.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummitConfig {
    #[serde(default)]
    pub items: ItemsConfig,
    #[serde(default)]
    pub state: StateConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsConfig {
    /// Snapshot file the host writes the resolved tree to
    #[serde(default = "default_items_file")]
    pub file: String,
}

impl Default for ItemsConfig {
    fn default() -> Self {
        ItemsConfig {
            file: default_items_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Where expansion state is persisted
    #[serde(default = "default_state_file")]
    pub file: String,
    /// Namespace key inside the state file, so independent trees sharing a
    /// file don't collide
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        StateConfig {
            file: default_state_file(),
            namespace: default_namespace(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Tab shown when none is given on the command line
    #[serde(default = "default_tab")]
    pub default_tab: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            default_tab: default_tab(),
        }
    }
}

fn default_items_file() -> String {
    "items.json".to_string()
}

fn default_state_file() -> String {
    ".state.json".to_string()
}

fn default_namespace() -> String {
    "summit".to_string()
}

fn default_tab() -> String {
    "all".to_string()
}
