pub mod use_note_form;

pub use use_note_form::use_note_form;
