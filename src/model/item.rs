use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::util::dates::{epoch_ms, parse_date};

use super::timeframe::Timeframe;

/// Whether an item is a goal or a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Goal,
    Project,
}

/// Lifecycle status of a work item.
///
/// `Unknown` absorbs any status string the snapshot carries that we don't
/// recognize, so deserialization is total and unknown statuses classify as
/// plain "ongoing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    OnTrack,
    Completed,
    Achieved,
    Partial,
    Missed,
    Paused,
    Caution,
    Issue,
    Dropped,
    Pending,
    Outdated,
    #[serde(other)]
    Unknown,
}

impl Status {
    /// True iff the item's lifecycle has ended. This is the one canonical
    /// closed set used by every view.
    pub fn is_closed(self) -> bool {
        matches!(
            self,
            Status::Completed
                | Status::Achieved
                | Status::Partial
                | Status::Missed
                | Status::Dropped
        )
    }

    pub fn is_paused(self) -> bool {
        self == Status::Paused
    }

    pub fn is_pending(self) -> bool {
        self == Status::Pending
    }
}

/// A goal or project node in the hierarchical tree.
///
/// `children` is the authoritative structure; `parent_id` is informational
/// only. Insertion order of `children` is display order at that level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub status: Status,
    /// Advisory percentage, not validated against children
    #[serde(default)]
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
    /// Terminal timestamp, present only once status is closed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WorkItem>,
}

impl WorkItem {
    /// Create a bare item with no timeframe and no children
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind, status: Status) -> Self {
        WorkItem {
            id: id.into(),
            parent_id: None,
            name: name.into(),
            kind,
            status,
            progress: 0,
            timeframe: None,
            closed_at: None,
            completed_on: None,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Due date is the end of the item's timeframe
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.timeframe.as_ref()?.end()
    }

    /// Timeframe span in epoch milliseconds; `None` if either bound is
    /// missing or unparseable
    pub fn duration_ms(&self) -> Option<i64> {
        let tf = self.timeframe.as_ref()?;
        let start = tf.start()?;
        let end = tf.end()?;
        Some(epoch_ms(end) - epoch_ms(start))
    }

    /// The date the item was closed: `completed_on` if set, else `closed_at`
    pub fn closed_date(&self) -> Option<NaiveDate> {
        self.completed_on
            .as_deref()
            .or(self.closed_at.as_deref())
            .and_then(parse_date)
    }
}

/// Collect every id in the tree, pre-order
pub fn all_ids(items: &[WorkItem]) -> Vec<String> {
    let mut ids = Vec::new();
    collect_ids(items, &mut ids);
    ids
}

fn collect_ids(items: &[WorkItem], ids: &mut Vec<String>) {
    for item in items {
        ids.push(item.id.clone());
        collect_ids(&item.children, ids);
    }
}
