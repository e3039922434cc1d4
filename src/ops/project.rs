use std::fmt;
use std::str::FromStr;

use crate::model::item::{ItemKind, WorkItem};
use crate::model::timeframe::Timeframe;

use super::timeframe::filter_by_timeframe;

/// The view-selection token: which tab is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    All,
    Goals,
    Projects,
    Completed,
    Paused,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::All, Tab::Goals, Tab::Projects, Tab::Completed, Tab::Paused];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Goals => "goals",
            Tab::Projects => "projects",
            Tab::Completed => "completed",
            Tab::Paused => "paused",
        }
    }

}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized tab token
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown tab: {0} (expected all, goals, projects, completed, or paused)")]
pub struct UnknownTab(String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Tab::All),
            "goals" => Ok(Tab::Goals),
            "projects" => Ok(Tab::Projects),
            "completed" => Ok(Tab::Completed),
            "paused" => Ok(Tab::Paused),
            other => Err(UnknownTab(other.to_string())),
        }
    }
}

/// Produce the item set for a tab: timeframe filter first, then either a
/// hierarchy-preserving filter (all/goals) or a pre-order flatten
/// (projects/completed/paused). Pure and deterministic.
pub fn project(items: &[WorkItem], tab: Tab, window: &Timeframe) -> Vec<WorkItem> {
    let filtered = filter_by_timeframe(items, window);
    match tab {
        Tab::All | Tab::Goals => filter_hierarchy(&filtered, tab),
        Tab::Projects => {
            let mut out = Vec::new();
            flatten_into(&filtered, &mut out, &|item| {
                item.kind == ItemKind::Project
                    && !item.status.is_closed()
                    && !item.status.is_paused()
            });
            out
        }
        Tab::Completed => {
            let mut out = Vec::new();
            flatten_into(&filtered, &mut out, &|item| item.status.is_closed());
            // One display field for the sorter, whichever the source set
            for item in &mut out {
                if item.completed_on.is_none() {
                    item.completed_on = item.closed_at.clone();
                }
            }
            out
        }
        Tab::Paused => {
            let mut out = Vec::new();
            flatten_into(&filtered, &mut out, &|item| item.status.is_paused());
            out
        }
    }
}

/// Whether an item qualifies for a hierarchy-preserving tab on its own
/// (ignoring descendants)
fn eligible(item: &WorkItem, tab: Tab) -> bool {
    match tab {
        Tab::All => !item.status.is_closed(),
        Tab::Goals => item.kind == ItemKind::Goal && !item.status.is_closed(),
        // Flattened tabs never go through the hierarchy filter
        Tab::Projects | Tab::Completed | Tab::Paused => false,
    }
}

/// Keep a node iff it is eligible itself or at least one recursively
/// filtered child survives; children are replaced by the filtered list. This
/// never produces a node without a path to something eligible.
fn filter_hierarchy(items: &[WorkItem], tab: Tab) -> Vec<WorkItem> {
    items
        .iter()
        .filter_map(|item| {
            let children = filter_hierarchy(&item.children, tab);
            if eligible(item, tab) || !children.is_empty() {
                let mut kept = item.clone();
                kept.children = children;
                Some(kept)
            } else {
                None
            }
        })
        .collect()
}

/// Pre-order traversal collecting every matching node as a leaf (children
/// discarded); descendants of a match are still visited
fn flatten_into(items: &[WorkItem], out: &mut Vec<WorkItem>, matches: &impl Fn(&WorkItem) -> bool) {
    for item in items {
        if matches(item) {
            let mut leaf = item.clone();
            leaf.children = Vec::new();
            out.push(leaf);
        }
        flatten_into(&item.children, out, matches);
    }
}
