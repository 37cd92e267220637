use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{SessionAction, SignInRequest};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FormError, TextField,
};
use validator::Validate;

use crate::forms::{error_for, field_errors};
use crate::routes::Route;
use crate::session::use_session;

/// Email/password sign-in. A signed-in visitor is sent straight to the
/// dashboard, which then picks the role's default tab.
#[component]
pub fn SignIn() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);

    if session.state.read().is_authenticated() {
        navigator().replace(Route::Dashboard { tab: None });
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let req = SignInRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        if let Err(e) = req.validate() {
            errors.set(field_errors(&e));
            return;
        }
        errors.set(HashMap::new());
        session.dispatch(SessionAction::LoginStart);

        let api = session.api();
        spawn(async move {
            match api.sign_in(&req).await {
                Ok(response) => {
                    session.login(response);
                    navigator().push(Route::Dashboard { tab: None });
                }
                Err(e) => {
                    tracing::warn!(email = %req.email, error = %e, "Sign-in failed");
                    session.dispatch(SessionAction::LoginFailure(e.message));
                }
            }
        });
    };

    let state = session.state.read();
    let loading = state.loading;
    let banner = state.error.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your dashboard" }
                }
                CardContent {
                    FormError { message: banner }
                    form { class: "auth-form", onsubmit: handle_submit,
                        TextField {
                            name: "email",
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            error: error_for(&errors.read(), "email"),
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        TextField {
                            name: "password",
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            error: error_for(&errors.read(), "password"),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading,
                            "Sign In"
                        }
                    }
                }
                CardFooter {
                    div { class: "auth-links",
                        Link { to: Route::ForgotPassword {}, "Forgot password?" }
                        Link { to: Route::SignUp {}, "Create an account" }
                    }
                }
            }
        }
    }
}
