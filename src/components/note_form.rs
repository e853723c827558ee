use dioxus::prelude::*;

use crate::components::{SelectInput, TextInput};
use crate::hooks::use_note_form;
use crate::stores::prefs_store;
use crate::utils::{Category, DraftField, Note, Priority};

/// Collapsible form creating notes.
///
/// The owner keeps the list; a valid submit hands `set_notes` the list with
/// the new note in front.
#[component]
pub fn NoteForm(notes: Signal<Vec<Note>>, set_notes: EventHandler<Vec<Note>>) -> Element {
    let mut form_state = use_note_form();

    let priority_options: Vec<(String, String)> = Priority::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect();
    let category_options: Vec<(String, String)> = Category::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), c.label().to_string()))
        .collect();

    let handle_field_change = move |(name, value): (String, String)| {
        form_state.write().change_named_field(&name, value);
    };

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let result = form_state.write().submit(&notes.read());
        if let Ok(updated) = result {
            set_notes.call(updated);
        }
    };

    let state = form_state.read().clone();
    let report_validation = prefs_store::PREFS.read().report_validation;

    rsx! {
        div {
            class: "mb-6",

            button {
                r#type: "button",
                class: "w-full mb-4 py-2 border border-purple-500 text-purple-500 rounded-lg hover:bg-purple-500/10 transition",
                aria_expanded: "{state.visible}",
                onclick: move |_| form_state.write().toggle_visibility(),
                if state.visible {
                    "✖ Hide Form"
                } else {
                    "➕ Add New Note"
                }
            }

            if state.visible {
                form {
                    onsubmit: handle_submit,

                    TextInput {
                        label: "Title",
                        name: DraftField::Title.name().to_string(),
                        value: state.draft.field_value(DraftField::Title),
                        required: true,
                        on_change: handle_field_change,
                    }

                    SelectInput {
                        label: "Priority",
                        name: DraftField::Priority.name().to_string(),
                        value: state.draft.field_value(DraftField::Priority),
                        options: priority_options,
                        on_change: handle_field_change,
                    }

                    SelectInput {
                        label: "Category",
                        name: DraftField::Category.name().to_string(),
                        value: state.draft.field_value(DraftField::Category),
                        options: category_options,
                        on_change: handle_field_change,
                    }

                    TextInput {
                        label: "Description",
                        name: DraftField::Description.name().to_string(),
                        value: state.draft.field_value(DraftField::Description),
                        required: true,
                        multiline: true,
                        on_change: handle_field_change,
                    }

                    if report_validation {
                        if let Some(err) = state.error {
                            div {
                                class: "mb-4 text-red-500 text-sm",
                                role: "alert",
                                "{err}"
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full bg-purple-500 text-white py-2 rounded-lg cursor-pointer hover:bg-purple-600",
                        "Add Note"
                    }
                }
            }
        }
    }
}
