use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{ProfileUpdate, Role, SessionAction, User};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, FormError,
    PageHeader, SelectField, TextField, ToastOptions, UserAvatar,
};
use validator::Validate;

use crate::forms::{apply_server_error, error_for, field_errors, opt_str};
use crate::session::use_session;

/// Pre-fill values for the edit form.
fn form_values(user: &User) -> ProfileUpdate {
    ProfileUpdate {
        name: user.name.clone(),
        department: user.department.clone(),
        level: user.level.clone(),
        gender: user.gender.clone(),
        photo: user.photo.clone(),
    }
}

/// Edit the signed-in user's own profile. Role and admin flag are read-only
/// here.
#[component]
pub fn ProfileView() -> Element {
    let session = use_session();
    let Some(user) = session.current_user() else {
        return rsx! {};
    };

    rsx! {
        ProfileForm { key: "{user.id}", user }
    }
}

#[component]
fn ProfileForm(user: User) -> Element {
    let mut session = use_session();
    let toast = use_toast();
    let initial = form_values(&user);
    let mut name = use_signal(|| initial.name.clone());
    let mut department = use_signal(|| initial.department.clone().unwrap_or_default());
    let mut level = use_signal(|| initial.level.clone().unwrap_or_default());
    let mut gender = use_signal(|| initial.gender.clone().unwrap_or_default());
    let mut photo = use_signal(|| initial.photo.clone().unwrap_or_default());
    let mut errors = use_signal(HashMap::<String, String>::new);

    let user_id = user.id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let update = ProfileUpdate {
            name: name().trim().to_string(),
            department: opt_str(&department()),
            level: opt_str(&level()),
            gender: opt_str(&gender()),
            photo: opt_str(&photo()),
        };
        if let Err(e) = update.validate() {
            errors.set(field_errors(&e));
            return;
        }
        errors.set(HashMap::new());
        session.dispatch(SessionAction::UpdateStart);

        let id = user_id.clone();
        let api = session.api();
        spawn(async move {
            match api.update_profile(&id, &update).await {
                Ok(updated) => {
                    session.dispatch(SessionAction::UpdateSuccess(updated));
                    toast.success("Profile updated.".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    tracing::warn!(user_id = %id, error = %e, "Profile update failed");
                    let (fields, message) = apply_server_error(&e);
                    errors.set(fields);
                    session.dispatch(SessionAction::UpdateFailure(message));
                }
            }
        });
    };

    let state = session.state.read();
    let saving = state.loading;
    let banner = state.error.clone();
    let preview = opt_str(&photo());

    rsx! {
        div { class: "container",
            PageHeader { title: "Profile", description: "Your account details" }

            Card {
                CardHeader {
                    div { class: "row-actions",
                        UserAvatar { name: name(), photo: preview }
                        div {
                            CardTitle { "{user.email}" }
                            CardDescription {
                                "{user.role.display_name()}"
                                if user.is_admin { " · Administrator" }
                            }
                        }
                    }
                }
                CardContent {
                    FormError { message: banner }
                    form { class: "auth-form", onsubmit: handle_submit,
                        TextField {
                            name: "name",
                            label: "Full name",
                            value: name(),
                            error: error_for(&errors.read(), "name"),
                            on_input: move |evt: FormEvent| name.set(evt.value()),
                        }
                        if user.role == Role::Student {
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
                        TextField {
                            name: "photo",
                            label: "Photo URL",
                            input_type: "url",
                            placeholder: "https://",
                            value: photo(),
                            error: error_for(&errors.read(), "photo"),
                            on_input: move |evt: FormEvent| photo.set(evt.value()),
                        }
                        Button { button_type: "submit", loading: saving, "Save changes" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn form_starts_from_current_profile() {
        let user = User {
            id: "u1".into(),
            name: "Ana Reyes".into(),
            email: "ana@example.com".into(),
            role: Role::Student,
            is_admin: false,
            photo: None,
            department: Some("BSIT".into()),
            level: Some("3".into()),
            gender: None,
            verified: true,
        };
        let values = form_values(&user);
        assert_eq!(values.name, "Ana Reyes");
        assert_eq!(values.department.as_deref(), Some("BSIT"));
        assert!(values.validate().is_ok());
    }

    #[test]
    fn photo_must_be_a_url() {
        let update = ProfileUpdate {
            name: "Ana".into(),
            photo: Some("not a url".into()),
            ..ProfileUpdate::default()
        };
        let errors = field_errors(&update.validate().unwrap_err());
        assert_eq!(errors.get("photo").map(String::as_str), Some("Photo must be a URL"));
    }
}
