use std::cmp::Ordering;

use crate::model::item::WorkItem;
use crate::util::dates::epoch_ms;

use super::project::Tab;

/// Order a projected item set for its tab. Returns a new sequence; the
/// input is never reordered in place. Only the top level is sorted —
/// child order is display order by the data-model contract.
pub fn sort_for_tab(items: &[WorkItem], tab: Tab) -> Vec<WorkItem> {
    let mut sorted = items.to_vec();
    match tab {
        // longest-running first
        Tab::All | Tab::Goals => sorted.sort_by(by_duration_desc),
        // soonest due first
        Tab::Projects | Tab::Paused => sorted.sort_by(by_due_date_asc),
        // most recently closed first
        Tab::Completed => sorted.sort_by(by_closed_date_desc),
    }
    sorted
}

fn by_name(a: &WorkItem, b: &WorkItem) -> Ordering {
    a.name.cmp(&b.name)
}

fn by_duration_desc(a: &WorkItem, b: &WorkItem) -> Ordering {
    match (a.duration_ms(), b.duration_ms()) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| by_name(a, b)),
        // items missing a bound sort last
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => by_name(a, b),
    }
}

fn by_due_date_asc(a: &WorkItem, b: &WorkItem) -> Ordering {
    match (a.due_date(), b.due_date()) {
        (Some(da), Some(db)) => {
            epoch_ms(da).cmp(&epoch_ms(db)).then_with(|| by_name(a, b))
        }
        // items with no due date sort last
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => by_name(a, b),
    }
}

fn by_closed_date_desc(a: &WorkItem, b: &WorkItem) -> Ordering {
    // missing/unparseable dates sort as the earliest possible date, which
    // puts them last in descending order
    let ka = a.closed_date().map(epoch_ms).unwrap_or(i64::MIN);
    let kb = b.closed_date().map(epoch_ms).unwrap_or(i64::MIN);
    kb.cmp(&ka).then_with(|| by_name(a, b))
}
