use crate::model::item::{ItemKind, Status, WorkItem};
use crate::model::timeframe::Timeframe;

use super::coordinator::WidgetCoordinator;
use super::expansion::ExpansionStore;

/// A visible row in the rendered list: one projected item plus the UI state
/// the renderer needs to draw it
#[derive(Debug, Clone)]
pub struct Row {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub status: Status,
    pub progress: u8,
    pub timeframe: Option<Timeframe>,
    /// Nesting depth (0 = top-level)
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_last_sibling: bool,
    /// For tree continuation lines: whether each ancestor is the last sibling
    pub ancestor_last: Vec<bool>,
    /// Whether this row may offer its inline quick-add editor
    pub can_quick_add: bool,
}

/// Flatten a projected tree into visible rows, descending into a node's
/// children only where the store says it is expanded.
pub fn build_rows(
    items: &[WorkItem],
    store: &ExpansionStore,
    coordinator: &WidgetCoordinator,
) -> Vec<Row> {
    let mut rows = Vec::new();
    walk(items, 0, &[], store, coordinator, &mut rows);
    rows
}

fn walk(
    items: &[WorkItem],
    depth: usize,
    ancestor_last: &[bool],
    store: &ExpansionStore,
    coordinator: &WidgetCoordinator,
    rows: &mut Vec<Row>,
) {
    let count = items.len();
    for (i, item) in items.iter().enumerate() {
        let is_last = i == count - 1;
        let has_children = !item.children.is_empty();
        let is_expanded = has_children && store.is_expanded(&item.id);

        rows.push(Row {
            id: item.id.clone(),
            name: item.name.clone(),
            kind: item.kind,
            status: item.status,
            progress: item.progress,
            timeframe: item.timeframe.clone(),
            depth,
            has_children,
            is_expanded,
            is_last_sibling: is_last,
            ancestor_last: ancestor_last.to_vec(),
            can_quick_add: coordinator.should_show_add(&item.id),
        });

        if is_expanded {
            let mut next_ancestor_last = ancestor_last.to_vec();
            next_ancestor_last.push(is_last);
            walk(
                &item.children,
                depth + 1,
                &next_ancestor_last,
                store,
                coordinator,
                rows,
            );
        }
    }
}
