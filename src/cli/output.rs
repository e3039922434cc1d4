use serde::Serialize;

use crate::model::item::{ItemKind, Status};
use crate::ui::rows::Row;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ViewJson {
    pub tab: String,
    pub rows: Vec<RowJson>,
}

#[derive(Serialize)]
pub struct RowJson {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub status: Status,
    pub progress: u8,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub can_quick_add: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

pub fn row_to_json(row: &Row) -> RowJson {
    RowJson {
        id: row.id.clone(),
        name: row.name.clone(),
        kind: row.kind,
        status: row.status,
        progress: row.progress,
        depth: row.depth,
        has_children: row.has_children,
        is_expanded: row.is_expanded,
        can_quick_add: row.can_quick_add,
        start_date: row.timeframe.as_ref().and_then(|tf| tf.start_date.clone()),
        end_date: row.timeframe.as_ref().and_then(|tf| tf.end_date.clone()),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn status_label(status: Status) -> &'static str {
    match status {
        Status::OnTrack => "on track",
        Status::Completed => "completed",
        Status::Achieved => "achieved",
        Status::Partial => "partial",
        Status::Missed => "missed",
        Status::Paused => "paused",
        Status::Caution => "caution",
        Status::Issue => "issue",
        Status::Dropped => "dropped",
        Status::Pending => "pending",
        Status::Outdated => "outdated",
        Status::Unknown => "unknown",
    }
}

fn kind_char(kind: ItemKind) -> char {
    match kind {
        ItemKind::Goal => 'G',
        ItemKind::Project => 'P',
    }
}

/// Format one row as a tree line:
/// `│  └─ ▾ [G] Ship v2  (on track, 60%)  2025-01-01..2025-12-31`
pub fn format_row_line(row: &Row) -> String {
    let mut line = String::new();
    // top-level items sit at column 0, so the depth-0 ancestor draws nothing
    for last in row.ancestor_last.iter().skip(1) {
        line.push_str(if *last { "   " } else { "│  " });
    }
    if row.depth > 0 {
        line.push_str(if row.is_last_sibling { "└─ " } else { "├─ " });
    }
    let marker = if !row.has_children {
        "· "
    } else if row.is_expanded {
        "▾ "
    } else {
        "▸ "
    };
    line.push_str(marker);
    line.push_str(&format!(
        "[{}] {}  ({}, {}%)",
        kind_char(row.kind),
        row.name,
        status_label(row.status),
        row.progress
    ));
    if let Some(tf) = &row.timeframe {
        let start = tf.start_date.as_deref().unwrap_or("..");
        let end = tf.end_date.as_deref().unwrap_or("..");
        line.push_str(&format!("  {}..{}", start, end));
    }
    line
}
