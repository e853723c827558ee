use dioxus::prelude::*;

use crate::utils::{format_datetime, format_relative_time, Note, Priority};

/// Read-only list of the owner's notes, newest first
#[component]
pub fn NoteList(notes: Signal<Vec<Note>>) -> Element {
    let notes = notes.read();

    if notes.is_empty() {
        return rsx! {
            p {
                class: "text-center text-muted-foreground py-8",
                "No notes yet"
            }
        };
    }

    rsx! {
        div {
            class: "space-y-4",
            for note in notes.iter() {
                NoteCard {
                    key: "{note.id}",
                    note: note.clone(),
                }
            }
        }
    }
}

#[component]
fn NoteCard(note: Note) -> Element {
    let accent = match note.priority {
        Priority::High => "border-red-500",
        Priority::Medium => "border-yellow-500",
        Priority::Low => "border-green-500",
    };
    let priority = note.priority.label();
    let category = note.category.label();
    let relative = format_relative_time(note.created_at);
    let full_time = format_datetime(note.created_at);

    rsx! {
        div {
            class: "p-4 bg-card rounded-lg shadow-md border-l-4 {accent}",

            h3 {
                class: "text-lg font-bold",
                "{note.title}"
            }
            div {
                class: "flex gap-3 text-sm text-muted-foreground",
                span { "{priority}" }
                span { "{category}" }
                span {
                    title: "{full_time}",
                    "{relative}"
                }
            }
            p {
                class: "mt-2 whitespace-pre-wrap",
                "{note.description}"
            }
        }
    }
}
