use dioxus::prelude::*;

use crate::stores::prefs_store::{self, PREFS};

/// Checkboxes for the stored form preferences
#[component]
pub fn PrefsPanel() -> Element {
    let prefs = PREFS.read().clone();

    rsx! {
        details {
            class: "mt-8 text-sm text-muted-foreground",

            summary {
                class: "cursor-pointer",
                "Preferences"
            }

            label {
                class: "flex items-center gap-2 mt-2",
                input {
                    r#type: "checkbox",
                    checked: prefs.start_expanded,
                    onchange: move |evt| {
                        let mut updated = prefs_store::get_prefs();
                        updated.start_expanded = evt.checked();
                        prefs_store::set_prefs(updated);
                    }
                }
                "Open the form on page load"
            }

            label {
                class: "flex items-center gap-2 mt-2",
                input {
                    r#type: "checkbox",
                    checked: prefs.report_validation,
                    onchange: move |evt| {
                        let mut updated = prefs_store::get_prefs();
                        updated.report_validation = evt.checked();
                        prefs_store::set_prefs(updated);
                    }
                }
                "Explain why a note was not added"
            }
        }
    }
}
