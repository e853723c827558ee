//! use_note_form hook - local state of the note creation form
//!
//! Holds the draft, the show/hide flag and the last rejected-submit reason.
//! All transitions are plain synchronous methods on `NoteFormState` so the
//! component only wires events to them.

use dioxus::prelude::*;

use crate::stores::prefs_store;
use crate::utils::{Draft, DraftError, DraftField, Note};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteFormState {
    pub draft: Draft,
    pub visible: bool,
    /// Reason the last submit was rejected, cleared by the next edit
    pub error: Option<DraftError>,
}

impl NoteFormState {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            ..Self::default()
        }
    }

    /// Write one draft field. No validation happens here.
    pub fn change_field(&mut self, field: DraftField, value: String) {
        self.draft.set_field(field, value);
        self.error = None;
    }

    /// Route a change coming from an input's `name` attribute
    pub fn change_named_field(&mut self, name: &str, value: String) {
        match DraftField::from_name(name) {
            Some(field) => self.change_field(field, value),
            None => log::warn!("Ignoring change for unknown field '{}'", name),
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Turn the draft into a note and return `notes` with it prepended.
    ///
    /// On success the draft is reset to defaults. On failure the draft and
    /// the list are left untouched and the reason is kept in `error`.
    /// Visibility is never changed.
    pub fn submit(&mut self, notes: &[Note]) -> Result<Vec<Note>, DraftError> {
        let note = match Note::from_draft(&self.draft) {
            Ok(note) => note,
            Err(e) => {
                log::warn!("Note not added: {}", e);
                self.error = Some(e);
                return Err(e);
            }
        };

        log::info!("Adding note {} ({})", note.id, note.title);

        let mut updated = Vec::with_capacity(notes.len() + 1);
        updated.push(note);
        updated.extend_from_slice(notes);

        self.draft = Draft::default();
        self.error = None;
        Ok(updated)
    }
}

/// Hook creating the form state, initially expanded if the user prefers it
pub fn use_note_form() -> Signal<NoteFormState> {
    use_signal(|| NoteFormState::new(prefs_store::get_prefs().start_expanded))
}
