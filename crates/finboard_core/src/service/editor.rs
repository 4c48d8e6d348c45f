//! Add/edit form state machine shared by every editable screen.
//!
//! # Responsibility
//! - Drive `Idle -> Editing -> (Invalid | persisted -> Idle)`.
//! - Keep form input and field errors while the form is open.
//!
//! # Invariants
//! - Nothing reaches the store until the form validates.
//! - Add allocates a fresh key; edit replaces the record at its key.
//! - Editing a key that disappeared is a no-op that closes the form.

use crate::model::record::Record;
use crate::model::validation::ValidationErrors;
use crate::store::record_store::{RecordStore, StoreError, StoreResult};
use log::{info, warn};

/// Form model for one record type.
pub trait RecordForm<R: Record>: Clone {
    /// Pre-fills the form from an existing record.
    fn from_record(record: &R) -> Self;

    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Builds a new record under a freshly allocated key.
    fn build(&self, key: R::Key) -> R;

    /// Writes form fields over `existing`, keeping fields the form does not own.
    fn merge_into(&self, existing: &R) -> R;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode<K> {
    Add,
    Edit(K),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorState<K, F> {
    Idle,
    Editing {
        mode: EditMode<K>,
        form: F,
        /// Errors from the last rejected submit.
        errors: Option<ValidationErrors>,
    },
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<K> {
    Created(K),
    Updated(K),
    /// Validation failed; the form stays open with errors.
    Invalid,
    /// The record being edited no longer exists; nothing was written.
    Missing(K),
    /// Submit was called with no open form.
    NotEditing,
}

/// Open/closed form plus its CRUD wiring.
#[derive(Debug, Clone)]
pub struct Editor<R: Record, F> {
    state: EditorState<R::Key, F>,
}

impl<R: Record, F> Default for Editor<R, F> {
    fn default() -> Self {
        Self {
            state: EditorState::Idle,
        }
    }
}

impl<R: Record, F: RecordForm<R>> Editor<R, F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState<R::Key, F> {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditorState::Editing { .. })
    }

    pub fn mode(&self) -> Option<&EditMode<R::Key>> {
        match &self.state {
            EditorState::Editing { mode, .. } => Some(mode),
            EditorState::Idle => None,
        }
    }

    pub fn form(&self) -> Option<&F> {
        match &self.state {
            EditorState::Editing { form, .. } => Some(form),
            EditorState::Idle => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        match &mut self.state {
            EditorState::Editing { form, .. } => Some(form),
            EditorState::Idle => None,
        }
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match &self.state {
            EditorState::Editing { errors, .. } => errors.as_ref(),
            EditorState::Idle => None,
        }
    }

    /// Opens an empty add form.
    pub fn open_add(&mut self, form: F) {
        self.state = EditorState::Editing {
            mode: EditMode::Add,
            form,
            errors: None,
        };
    }

    /// Opens an edit form pre-filled from the record under `key`.
    ///
    /// Returns `false` and stays idle when the record does not exist.
    pub fn open_edit(&mut self, store: &RecordStore<R>, key: &R::Key) -> bool {
        let Some(record) = store.get(key) else {
            warn!("event=editor_open module=editor status=noop reason=not_found key={key}");
            return false;
        };
        self.state = EditorState::Editing {
            mode: EditMode::Edit(key.clone()),
            form: F::from_record(record),
            errors: None,
        };
        true
    }

    /// Closes the form without writing.
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Validates and persists the open form.
    ///
    /// # Errors
    /// - Returns store errors other than not-found; the form stays open.
    pub fn submit(&mut self, store: &mut RecordStore<R>) -> StoreResult<SubmitOutcome<R::Key>> {
        let EditorState::Editing { mode, form, errors } = &mut self.state else {
            return Ok(SubmitOutcome::NotEditing);
        };

        if let Err(invalid) = form.validate() {
            info!(
                "event=form_submit module=editor status=invalid errors={}",
                invalid.len()
            );
            *errors = Some(invalid);
            return Ok(SubmitOutcome::Invalid);
        }

        let outcome = match mode {
            EditMode::Add => {
                let key = store.insert_with(|key| form.build(key))?;
                SubmitOutcome::Created(key)
            }
            EditMode::Edit(key) => match store.update(key, |existing| form.merge_into(existing)) {
                Ok(()) => SubmitOutcome::Updated(key.clone()),
                Err(StoreError::NotFound(_)) => {
                    warn!(
                        "event=form_submit module=editor status=noop reason=not_found key={key}"
                    );
                    SubmitOutcome::Missing(key.clone())
                }
                Err(err) => return Err(err),
            },
        };

        self.state = EditorState::Idle;
        Ok(outcome)
    }
}
