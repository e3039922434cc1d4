/// Whether any inline quick-add widget is open, and whose it is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Open(String),
}

/// Handle returned by [`WidgetCoordinator::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct Listener {
    id: u64,
    widget_id: String,
    notify: Box<dyn FnMut(&WidgetState)>,
}

/// Ensures at most one inline quick-add editor is open across an arbitrarily
/// deep, independently-mounted row tree.
///
/// Rows can't thread this through parent arguments, so they share one
/// coordinator and subscribe to its transitions. Every transition broadcasts
/// synchronously; misuse (closing a widget you don't own, opening while
/// another is open) is a refusal, never a panic.
pub struct WidgetCoordinator {
    state: WidgetState,
    listeners: Vec<Listener>,
    next_subscription: u64,
}

impl Default for WidgetCoordinator {
    fn default() -> Self {
        WidgetCoordinator::new()
    }
}

impl WidgetCoordinator {
    pub fn new() -> Self {
        WidgetCoordinator {
            state: WidgetState::Idle,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Try to open a widget. Granted only from idle, or to the widget that
    /// already holds the slot; callers must not show their editor on `false`.
    pub fn request_open(&mut self, widget_id: &str) -> bool {
        match &self.state {
            WidgetState::Idle => {
                self.state = WidgetState::Open(widget_id.to_string());
                self.broadcast();
                true
            }
            WidgetState::Open(owner) if owner == widget_id => true,
            WidgetState::Open(_) => false,
        }
    }

    /// Release the slot. A no-op unless the caller is the current owner, so
    /// a stale widget can't clobber a newer one's state.
    pub fn notify_closed(&mut self, widget_id: &str) {
        if matches!(&self.state, WidgetState::Open(owner) if owner == widget_id) {
            self.state = WidgetState::Idle;
            self.broadcast();
        }
    }

    /// Register a row's listener. The widget id ties the subscription to the
    /// row's own editor for the unmount case.
    pub fn subscribe(
        &mut self,
        widget_id: impl Into<String>,
        notify: impl FnMut(&WidgetState) + 'static,
    ) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push(Listener {
            id,
            widget_id: widget_id.into(),
            notify: Box::new(notify),
        });
        SubscriptionId(id)
    }

    /// Deregister a listener. If its widget currently holds the open slot
    /// (a row unmounted with its editor showing), the slot is released.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) {
        let Some(pos) = self.listeners.iter().position(|l| l.id == subscription.0) else {
            return;
        };
        let listener = self.listeners.remove(pos);
        self.notify_closed(&listener.widget_id);
    }

    /// Whether a row should show its own add affordance: yes when idle, and
    /// for the owner while its editor is open
    pub fn should_show_add(&self, widget_id: &str) -> bool {
        match &self.state {
            WidgetState::Idle => true,
            WidgetState::Open(owner) => owner == widget_id,
        }
    }

    fn broadcast(&mut self) {
        let state = self.state.clone();
        for listener in &mut self.listeners {
            (listener.notify)(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn only_one_widget_opens_at_a_time() {
        let mut c = WidgetCoordinator::new();
        assert!(c.request_open("row-1"));
        assert!(!c.request_open("row-2"));
        c.notify_closed("row-1");
        assert!(c.request_open("row-2"));
    }

    #[test]
    fn reopen_by_owner_is_granted() {
        let mut c = WidgetCoordinator::new();
        assert!(c.request_open("row-1"));
        assert!(c.request_open("row-1"));
        assert_eq!(c.state(), &WidgetState::Open("row-1".into()));
    }

    #[test]
    fn close_by_non_owner_is_a_no_op() {
        let mut c = WidgetCoordinator::new();
        c.request_open("row-1");
        c.notify_closed("row-2");
        assert_eq!(c.state(), &WidgetState::Open("row-1".into()));
    }

    #[test]
    fn transitions_broadcast_synchronously() {
        let mut c = WidgetCoordinator::new();
        let seen: Rc<RefCell<Vec<WidgetState>>> = Rc::default();
        let sink = Rc::clone(&seen);
        c.subscribe("row-1", move |state| sink.borrow_mut().push(state.clone()));

        c.request_open("row-1");
        c.request_open("row-2"); // rejected, no transition
        c.notify_closed("row-1");

        assert_eq!(
            *seen.borrow(),
            vec![WidgetState::Open("row-1".into()), WidgetState::Idle]
        );
    }

    #[test]
    fn unsubscribing_the_owner_releases_the_slot() {
        let mut c = WidgetCoordinator::new();
        let sub = c.subscribe("row-1", |_| {});
        c.request_open("row-1");
        c.unsubscribe(sub);
        assert_eq!(c.state(), &WidgetState::Idle);
        assert!(c.request_open("row-2"));
    }

    #[test]
    fn unsubscribing_a_non_owner_keeps_state() {
        let mut c = WidgetCoordinator::new();
        let sub = c.subscribe("row-2", |_| {});
        c.request_open("row-1");
        c.unsubscribe(sub);
        assert_eq!(c.state(), &WidgetState::Open("row-1".into()));
    }

    #[test]
    fn unknown_subscription_is_ignored() {
        let mut c = WidgetCoordinator::new();
        let sub = c.subscribe("row-1", |_| {});
        c.unsubscribe(sub);
        c.unsubscribe(sub);
        assert_eq!(c.state(), &WidgetState::Idle);
    }

    #[test]
    fn add_affordance_suppressed_for_non_owners() {
        let mut c = WidgetCoordinator::new();
        assert!(c.should_show_add("row-1"));
        assert!(c.should_show_add("row-2"));
        c.request_open("row-1");
        assert!(c.should_show_add("row-1"));
        assert!(!c.should_show_add("row-2"));
    }
}
