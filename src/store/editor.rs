//! Editor session state machine
//!
//! Transient create/edit workflow state bound to a modal:
//! `Closed -> OpenCreate | OpenEdit -> Closed`. The working copy is only
//! applied to the store on submit; cancel discards it. Sessions never
//! survive a restart.

use crate::error::{Error, Result};

use super::forms::{validate_required, Editable};
use super::EntityStore;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    /// Editing a blank working copy; an id is assigned on submit.
    OpenCreate,
    /// Editing a copy cloned from an existing record; id preserved.
    OpenEdit,
}

/// Modal editor session for one entity kind.
#[derive(Debug, Default)]
pub struct EditorSession<R> {
    draft: Option<R>,
    editing_existing: bool,
}

impl<R: Editable + Clone + Default> EditorSession<R> {
    pub fn new() -> Self {
        Self {
            draft: None,
            editing_existing: false,
        }
    }

    pub fn state(&self) -> SessionState {
        match (&self.draft, self.editing_existing) {
            (None, _) => SessionState::Closed,
            (Some(_), false) => SessionState::OpenCreate,
            (Some(_), true) => SessionState::OpenEdit,
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Open the editor. With a record, enters edit mode on a clone of it;
    /// without one, enters create mode on a blank working copy with the
    /// entity's declared defaults.
    pub fn open(&mut self, record: Option<&R>) {
        match record {
            Some(existing) => {
                self.draft = Some(existing.clone());
                self.editing_existing = true;
            }
            None => {
                self.draft = Some(R::default());
                self.editing_existing = false;
            }
        }
    }

    /// The working copy, for the form inputs to mutate.
    pub fn draft_mut(&mut self) -> Option<&mut R> {
        self.draft.as_mut()
    }

    pub fn draft(&self) -> Option<&R> {
        self.draft.as_ref()
    }

    /// Close, discarding the working copy. The store is untouched.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.editing_existing = false;
    }

    /// Validate and commit the working copy into the store
    /// (insert-or-replace-by-id), then close. On a validation failure the
    /// session stays open with the draft intact so the user can fix it.
    pub fn submit(&mut self, store: &mut EntityStore<R>) -> Result<String> {
        let draft = self.draft.as_ref().ok_or(Error::SessionClosed)?;
        validate_required(draft)?;

        let committed = self.draft.take().ok_or(Error::SessionClosed)?;
        self.editing_existing = false;
        Ok(store.upsert(committed))
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
