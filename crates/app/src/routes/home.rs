use dioxus::prelude::*;
use shared_types::NavEntry;
use shared_ui::{Button, ButtonVariant};

use crate::routes::{NavTargetLink, Route};
use crate::session::{use_nav, use_session};

/// Public landing page. Guests get the guest menu; signed-in users get a
/// shortcut to their dashboard.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_nav();
    let user = session.current_user();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "landing",
            header { class: "landing-header",
                span { class: "landing-brand", "Garment Dashboard" }
                nav { class: "landing-nav",
                    if let Some(user) = &user {
                        span { class: "muted", "Hi, {user.name}" }
                        Link { to: Route::Dashboard { tab: None }, class: "landing-link", "Dashboard" }
                    } else {
                        for entry in nav.menu.iter() {
                            if let NavEntry::Link { label, target, .. } = entry {
                                NavTargetLink { key: "{label}", target: *target,
                                    span { class: "landing-link", "{label}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "landing-hero",
                h1 { "Uniforms, rentals and production in one place" }
                p { class: "muted",
                    "Order and schedule garment fittings, track rentals and commercial jobs, and follow production from raw materials to finished products."
                }
                div { class: "landing-actions",
                    if user.is_some() {
                        Link { to: Route::Dashboard { tab: None },
                            Button { variant: ButtonVariant::Primary, "Go to Dashboard" }
                        }
                    } else {
                        Link { to: Route::SignUp {},
                            Button { variant: ButtonVariant::Primary, "Create an account" }
                        }
                        Link { to: Route::SignIn {},
                            Button { variant: ButtonVariant::Outline, "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
