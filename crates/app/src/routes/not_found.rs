use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all 404 page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        NotFoundView { path }
    }
}

/// Shared 404 body, also used by the dashboard for unknown or forbidden tabs.
#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: Route::Home {}, class: "not-found-link", "Back to Home" }
            }
        }
    }
}
