use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{Role, SignUpRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, FormError, SelectField, TextField, ToastOptions,
};
use validator::Validate;

use crate::forms::{apply_server_error, error_for, field_errors, opt_str};
use crate::routes::Route;
use crate::session::use_session;

/// Roles a visitor may pick for themselves. Admin accounts are promoted by
/// an existing admin.
const SELF_SERVICE_ROLES: &[Role] = &[Role::Student, Role::Coordinator, Role::CommercialJob];

#[component]
pub fn SignUp() -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut department = use_signal(String::new);
    let mut level = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let req = SignUpRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            role: role(),
            department: opt_str(&department()),
            level: opt_str(&level()),
            gender: opt_str(&gender()),
        };
        if let Err(e) = req.validate() {
            errors.set(field_errors(&e));
            return;
        }
        errors.set(HashMap::new());
        banner.set(None);
        loading.set(true);

        let api = session.api();
        spawn(async move {
            match api.sign_up(&req).await {
                Ok(()) => {
                    toast.success(
                        "Account created. Check your email to verify it, then sign in.".to_string(),
                        ToastOptions::new(),
                    );
                    navigator().push(Route::SignIn {});
                }
                Err(e) => {
                    tracing::warn!(email = %req.email, error = %e, "Sign-up failed");
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
                    CardTitle { "Create Account" }
                    CardDescription { "Register to place orders, rentals and commercial jobs" }
                }
                CardContent {
                    FormError { message: banner() }
                    form { class: "auth-form", onsubmit: handle_submit,
                        TextField {
                            name: "name",
                            label: "Full name",
                            value: name(),
                            error: error_for(&errors.read(), "name"),
                            on_input: move |evt: FormEvent| name.set(evt.value()),
                        }
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
                        SelectField {
                            name: "role",
                            label: "Account type",
                            value: role().as_str(),
                            onchange: move |evt: FormEvent| role.set(Role::from_str_or_unknown(&evt.value())),
                            for r in SELF_SERVICE_ROLES.iter() {
                                option { key: "{r.as_str()}", value: r.as_str(), "{r.display_name()}" }
                            }
                        }
                        if role() == Role::Student {
                            TextField {
                                name: "department",
                                label: "Department",
                                value: department(),
                                on_input: move |evt: FormEvent| department.set(evt.value()),
                            }
                            TextField {
                                name: "level",
                                label: "Year level",
                                value: level(),
                                on_input: move |evt: FormEvent| level.set(evt.value()),
                            }
                        }
                        SelectField {
                            name: "gender",
                            label: "Gender",
                            value: gender(),
                            onchange: move |evt: FormEvent| gender.set(evt.value()),
                            option { value: "", "Prefer not to say" }
                            option { value: "Male", "Male" }
                            option { value: "Female", "Female" }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            "Sign Up"
                        }
                    }
                }
                CardFooter {
                    div { class: "auth-links",
                        span { "Already registered? " }
                        Link { to: Route::SignIn {}, "Sign in" }
                    }
                }
            }
        }
    }
}
