use dioxus::prelude::*;

/// Labelled text input with an inline validation message.
#[component]
pub fn TextField(
    /// Doubles as the input `id` and the label's `for`.
    name: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "field-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field", "data-invalid": if invalid { "true" } else { "false" },
            label { class: "field-label", r#for: "{name}", "{label}" }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                span { class: "field-error", role: "alert", "{message}" }
            }
        }
    }
}

/// Native select with the same label and error layout as [`TextField`].
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn SelectField(
    name: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field", "data-invalid": if invalid { "true" } else { "false" },
            label { class: "field-label", r#for: "{name}", "{label}" }
            select {
                id: "{name}",
                name: "{name}",
                class: "field-input field-select",
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if let Some(message) = error {
                span { class: "field-error", role: "alert", "{message}" }
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    name: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] error: Option<String>,
    #[props(default = 3)] rows: u32,
) -> Element {
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field", "data-invalid": if invalid { "true" } else { "false" },
            label { class: "field-label", r#for: "{name}", "{label}" }
            textarea {
                id: "{name}",
                name: "{name}",
                class: "field-input field-textarea",
                rows: "{rows}",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(message) = error {
                span { class: "field-error", role: "alert", "{message}" }
            }
        }
    }
}

/// Form-level error banner, shown above the submit button.
#[component]
pub fn FormError(message: Option<String>) -> Element {
    match message {
        Some(message) if !message.is_empty() => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div { class: "form-error", role: "alert", "{message}" }
        },
        _ => rsx! {},
    }
}
