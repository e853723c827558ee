use dioxus::prelude::*;

/// Labelled text field. Renders a textarea when `multiline` is set.
///
/// `on_change` receives `(name, value)` on every keystroke. `required` only
/// marks the label; emptiness is checked by the owning form on submit.
#[component]
pub fn TextInput(
    label: String,
    name: String,
    value: String,
    on_change: EventHandler<(String, String)>,
    required: Option<bool>,
    multiline: Option<bool>,
    placeholder: Option<String>,
) -> Element {
    let required = required.unwrap_or(false);
    let placeholder = placeholder.unwrap_or_default();
    let input_name = name.clone();
    let textarea_name = name.clone();

    rsx! {
        div {
            class: "mb-4",

            label {
                r#for: "{name}",
                class: "block font-semibold",
                "{label}"
                if required {
                    span {
                        class: "text-red-500 ml-1",
                        "*"
                    }
                }
            }

            if multiline.unwrap_or(false) {
                textarea {
                    id: "{name}",
                    name: "{name}",
                    class: "w-full p-2 border border-border rounded-lg bg-background focus:outline-none focus:ring-2 focus:ring-primary resize-none",
                    rows: 4,
                    aria_required: "{required}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e| on_change.call((textarea_name.clone(), e.value())),
                }
            } else {
                input {
                    id: "{name}",
                    name: "{name}",
                    r#type: "text",
                    class: "w-full p-2 border border-border rounded-lg bg-background focus:outline-none focus:ring-2 focus:ring-primary",
                    aria_required: "{required}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e| on_change.call((input_name.clone(), e.value())),
                }
            }
        }
    }
}
