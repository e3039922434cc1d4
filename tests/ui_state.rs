use pretty_assertions::assert_eq;
use tempfile::TempDir;

use summit::model::item::{ItemKind, Status, WorkItem, all_ids};
use summit::ui::coordinator::{WidgetCoordinator, WidgetState};
use summit::ui::expansion::ExpansionStore;
use summit::ui::rows::build_rows;

fn tree() -> Vec<WorkItem> {
    let mut g = WorkItem::new("g", "Goal", ItemKind::Goal, Status::OnTrack);
    let mut p = WorkItem::new("p", "Project", ItemKind::Project, Status::OnTrack);
    p.children
        .push(WorkItem::new("x", "Leaf", ItemKind::Project, Status::OnTrack));
    g.children.push(p);
    vec![g]
}

// ---------------------------------------------------------------------------
// Expansion state across "reloads"
// ---------------------------------------------------------------------------

#[test]
fn never_seen_id_is_expanded_until_collapse_all() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".state.json");

    let mut store = ExpansionStore::load(&path, "summit");
    assert!(store.is_expanded("x"));

    let ids = all_ids(&tree());
    store.collapse_all(ids.iter().map(String::as_str));
    assert!(!store.is_expanded("x"));

    // and it stays collapsed after a reload
    let reloaded = ExpansionStore::load(&path, "summit");
    assert!(!reloaded.is_expanded("x"));
}

#[test]
fn toggled_state_survives_reload_and_drives_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".state.json");
    let items = tree();

    let mut store = ExpansionStore::load(&path, "summit");
    store.seed(all_ids(&items).iter().map(String::as_str));
    store.toggle("p");
    drop(store);

    let store = ExpansionStore::load(&path, "summit");
    let rows = build_rows(&items, &store, &WidgetCoordinator::new());
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    // "x" is hidden under the collapsed "p"
    assert_eq!(ids, vec!["g", "p"]);
}

#[test]
fn separate_namespaces_track_separate_trees() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".state.json");

    let mut a = ExpansionStore::load(&path, "tree-a");
    a.collapse_all(["shared-id"]);
    let b = ExpansionStore::load(&path, "tree-b");
    assert!(b.is_expanded("shared-id"));
    let a = ExpansionStore::load(&path, "tree-a");
    assert!(!a.is_expanded("shared-id"));
}

// ---------------------------------------------------------------------------
// Widget coordination across rows
// ---------------------------------------------------------------------------

#[test]
fn second_widget_waits_for_the_first_to_close() {
    let mut c = WidgetCoordinator::new();
    assert!(c.request_open("row-1"));
    assert!(!c.request_open("row-2"));
    c.notify_closed("row-1");
    assert!(c.request_open("row-2"));
}

#[test]
fn open_editor_suppresses_other_rows_add_affordance() {
    let items = tree();
    let store = ExpansionStore::in_memory("t");
    let mut c = WidgetCoordinator::new();

    let open_rows = build_rows(&items, &store, &c);
    assert!(open_rows.iter().all(|r| r.can_quick_add));

    c.request_open("p");
    let rows = build_rows(&items, &store, &c);
    for row in &rows {
        assert_eq!(row.can_quick_add, row.id == "p", "row {}", row.id);
    }

    c.notify_closed("p");
    let rows = build_rows(&items, &store, &c);
    assert!(rows.iter().all(|r| r.can_quick_add));
}

#[test]
fn unmounting_the_owning_row_frees_the_editor_slot() {
    let mut c = WidgetCoordinator::new();
    let sub = c.subscribe("row-1", |_| {});
    assert!(c.request_open("row-1"));
    // row-1 unmounts while its editor is open
    c.unsubscribe(sub);
    assert_eq!(c.state(), &WidgetState::Idle);
    assert!(c.request_open("row-2"));
}
