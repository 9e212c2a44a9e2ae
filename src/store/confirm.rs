//! Confirmation gate for destructive actions
//!
//! A yes/no dialog guarding deletes, approval submissions, and task
//! completion. The protected action is consumed on confirm, so it can
//! never run more than once per open/confirm cycle.

/// One-shot confirmation dialog state.
#[derive(Default)]
pub struct ConfirmGate<'a> {
    pending: Option<PendingAction<'a>>,
}

struct PendingAction<'a> {
    prompt: String,
    action: Box<dyn FnOnce() + 'a>,
}

impl<'a> ConfirmGate<'a> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Open the dialog with a prompt and the action to run on confirm.
    /// Re-opening replaces any pending action without running it.
    pub fn open(&mut self, prompt: impl Into<String>, action: impl FnOnce() + 'a) {
        self.pending = Some(PendingAction {
            prompt: prompt.into(),
            action: Box::new(action),
        });
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// The prompt to display while open.
    pub fn prompt(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.prompt.as_str())
    }

    /// Run the protected action and close. Returns true when an action was
    /// actually run; a second confirm on the same cycle is a no-op.
    pub fn confirm(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                (pending.action)();
                true
            }
            None => false,
        }
    }

    /// Close without running the action.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_confirm_runs_action_once() {
        let runs = Cell::new(0u32);
        let mut gate = ConfirmGate::new();

        gate.open("Delete note?", || runs.set(runs.get() + 1));
        assert!(gate.is_open());
        assert_eq!(gate.prompt(), Some("Delete note?"));

        assert!(gate.confirm());
        assert_eq!(runs.get(), 1);
        assert!(!gate.is_open());

        // Confirming again without re-opening does nothing
        assert!(!gate.confirm());
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_cancel_never_runs_action() {
        let runs = Cell::new(0u32);
        let mut gate = ConfirmGate::new();

        gate.open("Delete note?", || runs.set(runs.get() + 1));
        gate.cancel();

        assert!(!gate.is_open());
        assert!(!gate.confirm());
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_reopen_replaces_pending_action() {
        let first = Cell::new(false);
        let second = Cell::new(false);
        let mut gate = ConfirmGate::new();

        gate.open("first", || first.set(true));
        gate.open("second", || second.set(true));
        gate.confirm();

        assert!(!first.get());
        assert!(second.get());
    }

    #[test]
    fn test_cancelled_delete_leaves_record_present() {
        use crate::store::tests::Note;
        use crate::store::EntityStore;
        use std::cell::RefCell;

        let store = RefCell::new(EntityStore::seeded(vec![Note::new(
            "a", "keep me", "pending",
        )]));

        let mut gate = ConfirmGate::new();
        gate.open("Delete note a?", || {
            store.borrow_mut().remove("a");
        });
        gate.cancel();

        assert!(store.borrow().get("a").is_some());
    }
}
