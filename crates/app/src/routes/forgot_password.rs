use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{ForgotPasswordAction, ForgotPasswordRequest};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FormError, TextField,
};
use validator::Validate;

use crate::forms::{error_for, field_errors};
use crate::routes::Route;
use crate::session::use_session;

/// First step of the reset flow: request a one-time code by email.
#[component]
pub fn ForgotPassword() -> Element {
    let mut session = use_session();
    let mut email = use_signal(|| {
        session
            .forgot_password
            .peek()
            .email
            .clone()
            .unwrap_or_default()
    });
    let mut errors = use_signal(HashMap::<String, String>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let req = ForgotPasswordRequest {
            email: email().trim().to_string(),
        };
        if let Err(e) = req.validate() {
            errors.set(field_errors(&e));
            return;
        }
        errors.set(HashMap::new());
        session.dispatch_forgot_password(ForgotPasswordAction::RequestStart);

        let api = session.api();
        spawn(async move {
            match api.forgot_password(&req).await {
                Ok(resp) => {
                    session.dispatch_forgot_password(ForgotPasswordAction::RequestSuccess(
                        req.email.clone(),
                    ));
                    navigator().push(Route::OtpVerification { token: resp.token });
                }
                Err(e) => {
                    tracing::warn!(email = %req.email, error = %e, "Forgot-password request failed");
                    session.dispatch_forgot_password(ForgotPasswordAction::RequestFailure(e.message));
                }
            }
        });
    };

    let flow = session.forgot_password.read();
    let loading = flow.loading;
    let banner = flow.error.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Forgot Password" }
                    CardDescription { "We will email you a 6-digit code to reset your password" }
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
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading,
                            "Send Code"
                        }
                    }
                }
                CardFooter {
                    div { class: "auth-links",
                        Link { to: Route::SignIn {}, "Back to sign in" }
                    }
                }
            }
        }
    }
}
