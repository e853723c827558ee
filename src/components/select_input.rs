use dioxus::prelude::*;

/// Labelled dropdown over `(value, label)` pairs
#[component]
pub fn SelectInput(
    label: String,
    name: String,
    value: String,
    options: Vec<(String, String)>,
    on_change: EventHandler<(String, String)>,
    required: Option<bool>,
) -> Element {
    let required = required.unwrap_or(false);
    let select_name = name.clone();

    rsx! {
        div {
            class: "mb-4",

            label {
                r#for: "{name}",
                class: "block font-semibold",
                "{label}"
            }

            select {
                id: "{name}",
                name: "{name}",
                class: "w-full p-2 border border-border rounded-lg bg-background focus:outline-none focus:ring-2 focus:ring-primary",
                aria_required: "{required}",
                value: "{value}",
                onchange: move |e| on_change.call((select_name.clone(), e.value())),

                for (option_value, option_label) in options.iter() {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: *option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
