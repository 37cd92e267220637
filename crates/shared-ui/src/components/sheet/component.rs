use dioxus::prelude::*;

/// Side panel used for create and edit forms.
///
/// Clicking the overlay or the close button calls `on_close`; the panel
/// itself swallows clicks so form interaction never dismisses it.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    title: String,
    #[props(default)] description: Option<String>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                role: "dialog",
                "aria-label": "{title}",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "sheet-header",
                    h2 { class: "sheet-title", "{title}" }
                    SheetClose { on_close }
                }
                if let Some(description) = description {
                    p { class: "sheet-description", "{description}" }
                }
                div { class: "sheet-content", {children} }
            }
        }
    }
}

#[component]
pub fn SheetClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "sheet-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
