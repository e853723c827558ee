// UI Components
// This module contains all reusable UI components

pub mod note_form;
pub mod note_list;
pub mod prefs_panel;
pub mod select_input;
pub mod text_input;

pub use note_form::NoteForm;
pub use note_list::NoteList;
pub use prefs_panel::PrefsPanel;
pub use select_input::SelectInput;
pub use text_input::TextInput;
