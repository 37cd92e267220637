use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{ForgotPasswordAction, VerifyOtpRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, FormError, TextField, ToastOptions,
};
use validator::Validate;

use crate::forms::{error_for, field_errors};
use crate::routes::Route;
use crate::session::use_session;

/// Keep only digits, at most six.
fn sanitize_otp(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(6).collect()
}

/// Second step: confirm the emailed code for `token`.
#[component]
pub fn OtpVerification(token: String) -> Element {
    let mut session = use_session();
    let toast = use_toast();
    let mut otp = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut resending = use_signal(|| false);

    let email = session.forgot_password.read().email.clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let req = VerifyOtpRequest { otp: otp() };
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
            match api.verify_otp(&token, &req).await {
                Ok(()) => {
                    navigator().push(Route::ResetPassword { token });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "OTP verification failed");
                    banner.set(Some(e.message));
                }
            }
            loading.set(false);
        });
    };

    let resend_email = email.clone();
    let handle_resend = move |_| {
        let Some(address) = resend_email.clone() else {
            return;
        };
        resending.set(true);
        let api = session.api();
        spawn(async move {
            match api.send_otp(&address).await {
                Ok(resp) => {
                    session.dispatch_forgot_password(ForgotPasswordAction::RequestSuccess(address));
                    toast.success("A new code is on its way.".to_string(), ToastOptions::new());
                    navigator().replace(Route::OtpVerification { token: resp.token });
                }
                Err(e) => {
                    toast.error(e.message, ToastOptions::new());
                }
            }
            resending.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Verify Code" }
                    CardDescription {
                        if let Some(address) = &email {
                            "Enter the 6-digit code sent to {address}"
                        } else {
                            "Enter the 6-digit code from your email"
                        }
                    }
                }
                CardContent {
                    FormError { message: banner() }
                    form { class: "auth-form", onsubmit: handle_submit,
                        TextField {
                            name: "otp",
                            label: "Code",
                            value: otp(),
                            placeholder: "000000",
                            error: error_for(&errors.read(), "otp"),
                            on_input: move |evt: FormEvent| otp.set(sanitize_otp(&evt.value())),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            loading: loading(),
                            "Verify"
                        }
                    }
                }
                CardFooter {
                    div { class: "auth-links",
                        if email.is_some() {
                            Button {
                                variant: ButtonVariant::Link,
                                loading: resending(),
                                onclick: handle_resend,
                                "Resend code"
                            }
                        }
                        Link { to: Route::ForgotPassword {}, "Use a different email" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_input_keeps_six_digits() {
        assert_eq!(sanitize_otp("12a3 45-678"), "123456");
        assert_eq!(sanitize_otp("abc"), "");
    }
}
