use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{ForgotPasswordAction, ResetPasswordRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, FormError, TextField, ToastOptions,
};
use validator::Validate;

use crate::forms::{apply_server_error, error_for, field_errors};
use crate::routes::Route;
use crate::session::use_session;

/// Last step: choose a new password. Success ends the forgot-password flow.
#[component]
pub fn ResetPassword(token: String) -> Element {
    let mut session = use_session();
    let toast = use_toast();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let req = ResetPasswordRequest {
            password: password(),
            confirm_password: confirm(),
        };
        if let Err(e) = req.validate() {
            errors.set(field_errors(&e));
            return;
        }
        errors.set(HashMap::new());
        banner.set(None);
        loading.set(true);

        let api = session.api();
        let token = token.clone();
        spawn(async move {
            match api.reset_password(&token, &req).await {
                Ok(()) => {
                    session.dispatch_forgot_password(ForgotPasswordAction::Reset);
                    toast.success(
                        "Password updated. Sign in with your new password.".to_string(),
                        ToastOptions::new(),
                    );
                    navigator().push(Route::SignIn {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Password reset failed");
                    let (fields, message) = apply_server_error(&e);
                    errors.set(fields);
                    banner.set(Some(message));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Reset Password" }
                    CardDescription { "Choose a new password of at least 8 characters" }
                }
                CardContent {
                    FormError { message: banner() }
                    form { class: "auth-form", onsubmit: handle_submit,
                        TextField {
                            name: "password",
                            label: "New password",
                            input_type: "password",
                            value: password(),
                            error: error_for(&errors.read(), "password"),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        TextField {
                            name: "confirm_password",
                            label: "Confirm password",
                            input_type: "password",
                            value: confirm(),
                            error: error_for(&errors.read(), "confirm_password"),
                            on_input: move |evt: FormEvent| confirm.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            "Update Password"
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
