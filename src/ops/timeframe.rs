use crate::model::item::WorkItem;
use crate::model::timeframe::Timeframe;

/// Recursively restrict a tree to items overlapping the window.
///
/// A node survives if its own timeframe overlaps the window, or if any
/// recursively filtered child survives. A surviving node's children are
/// always replaced by the filtered child list. Items with no timeframe are
/// included.
pub fn filter_by_timeframe(items: &[WorkItem], window: &Timeframe) -> Vec<WorkItem> {
    // "All time" selected: nothing to filter
    if window.is_unbounded() {
        return items.to_vec();
    }

    items
        .iter()
        .filter_map(|item| {
            let children = filter_by_timeframe(&item.children, window);
            let included = match &item.timeframe {
                Some(tf) => window.overlaps(tf),
                None => true,
            };
            if included || !children.is_empty() {
                let mut kept = item.clone();
                kept.children = children;
                Some(kept)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::{ItemKind, Status};

    fn item(id: &str, start: &str, end: &str) -> WorkItem {
        let mut it = WorkItem::new(id, id.to_uppercase(), ItemKind::Goal, Status::OnTrack);
        it.timeframe = Some(Timeframe::new(Some(start), Some(end)));
        it
    }

    #[test]
    fn unbounded_window_returns_tree_unchanged() {
        let mut root = item("g", "2025-01-01", "2025-03-31");
        root.children.push(item("p", "2020-01-01", "2020-02-01"));
        let tree = vec![root];
        assert_eq!(filter_by_timeframe(&tree, &Timeframe::unbounded()), tree);
    }

    #[test]
    fn node_outside_window_is_dropped() {
        let tree = vec![item("g", "2025-01-01", "2025-03-31")];
        let window = Timeframe::new(Some("2025-04-01"), Some("2025-06-30"));
        assert!(filter_by_timeframe(&tree, &window).is_empty());
    }

    #[test]
    fn parent_survives_through_overlapping_child() {
        let mut root = item("g", "2024-01-01", "2024-12-31");
        root.children.push(item("p", "2025-05-01", "2025-05-31"));
        let window = Timeframe::new(Some("2025-04-01"), Some("2025-06-30"));
        let out = filter_by_timeframe(&[root], &window);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "g");
        assert_eq!(out[0].children.len(), 1);
        assert_eq!(out[0].children[0].id, "p");
    }

    #[test]
    fn surviving_parent_gets_filtered_children() {
        let mut root = item("g", "2025-05-01", "2025-05-31");
        root.children.push(item("in", "2025-05-10", "2025-05-20"));
        root.children.push(item("out", "2020-01-01", "2020-02-01"));
        let window = Timeframe::new(Some("2025-04-01"), Some("2025-06-30"));
        let out = filter_by_timeframe(&[root], &window);
        assert_eq!(out[0].children.len(), 1);
        assert_eq!(out[0].children[0].id, "in");
    }

    #[test]
    fn item_without_timeframe_is_included() {
        let bare = WorkItem::new("x", "X", ItemKind::Project, Status::OnTrack);
        let window = Timeframe::new(Some("2025-01-01"), Some("2025-12-31"));
        assert_eq!(filter_by_timeframe(&[bare], &window).len(), 1);
    }
}
