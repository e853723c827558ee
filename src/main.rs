#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod hooks;
mod stores;
mod utils;

use components::{NoteForm, NoteList, PrefsPanel};
use utils::Note;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting quicknotes");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Canonical notes list; only the form's submit replaces it
    let mut notes = use_signal(Vec::<Note>::new);

    rsx! {
        main {
            class: "max-w-lg mx-auto mt-10 p-6 bg-background rounded-lg shadow-lg",

            h2 {
                class: "text-2xl font-bold mb-4 text-center",
                "📝 Notes App"
            }

            NoteForm {
                notes,
                set_notes: move |updated: Vec<Note>| {
                    log::debug!("Notes list now holds {} notes", updated.len());
                    notes.set(updated);
                },
            }

            NoteList { notes }

            PrefsPanel {}
        }
    }
}
