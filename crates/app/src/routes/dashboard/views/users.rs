use dioxus::prelude::*;
use shared_types::{Role, User};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, DataTable, DataTableCell,
    DataTableEmpty, DataTableRow, PageHeader, SkeletonTable, ToastOptions, UserAvatar,
};

use super::{columns, viewer_id, LoadError};
use crate::session::use_session;

const COLUMNS: [&str; 6] = ["", "Name", "Email", "Role", "Admin", ""];

/// Whether the viewer may change `target`. Admins cannot demote or delete
/// their own account from this table.
fn can_manage(viewer_id: &str, target: &User) -> bool {
    viewer_id != target.id
}

/// Label for the admin toggle. Only Admin-role accounts can hold the flag.
fn admin_toggle_label(user: &User) -> Option<&'static str> {
    match (user.role, user.is_admin) {
        (Role::Admin, true) => Some("Revoke admin"),
        (Role::Admin, false) => Some("Grant admin"),
        _ => None,
    }
}

#[component]
pub fn UsersView() -> Element {
    let session = use_session();
    let toast = use_toast();

    let mut data = use_resource(move || {
        let api = session.api();
        async move { api.list_users().await }
    });

    let toggle_admin = move |(id, is_admin): (String, bool)| {
        let api = session.api();
        spawn(async move {
            match api.set_admin_flag(&id, is_admin).await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, is_admin = user.is_admin, "Admin flag changed");
                    data.restart();
                }
                Err(e) => toast.error(e.message, ToastOptions::new()),
            }
        });
    };

    let remove = move |id: String| {
        let api = session.api();
        spawn(async move {
            match api.delete_user(&id).await {
                Ok(()) => {
                    toast.success("User deleted.".to_string(), ToastOptions::new());
                    data.restart();
                }
                Err(e) => {
                    tracing::warn!(user_id = %id, error = %e, "Delete user failed");
                    toast.error(e.message, ToastOptions::new());
                }
            }
        });
    };

    let me = viewer_id(&session);

    rsx! {
        div { class: "container",
            PageHeader { title: "Users", description: "Registered accounts" }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(users)) => rsx! {
                    DataTable { columns: columns(&COLUMNS),
                        if users.is_empty() {
                            DataTableEmpty { colspan: COLUMNS.len(), message: "No users found." }
                        }
                        for u in users.iter() {
                            DataTableRow { key: "{u.id}",
                                DataTableCell { UserAvatar { name: u.name.clone(), photo: u.photo.clone() } }
                                DataTableCell {
                                    "{u.name} "
                                    if !u.verified {
                                        Badge { variant: BadgeVariant::Outline, "Unverified" }
                                    }
                                }
                                DataTableCell { "{u.email}" }
                                DataTableCell { "{u.role.display_name()}" }
                                DataTableCell {
                                    if u.is_admin {
                                        Badge { variant: BadgeVariant::Success, "Yes" }
                                    } else {
                                        span { class: "muted", "No" }
                                    }
                                }
                                DataTableCell {
                                    if can_manage(&me, u) {
                                        div { class: "row-actions",
                                            if let Some(label) = admin_toggle_label(u) {
                                                Button {
                                                    variant: ButtonVariant::Outline,
                                                    size: ButtonSize::Small,
                                                    onclick: {
                                                        let id = u.id.clone();
                                                        let next = !u.is_admin;
                                                        move |_| toggle_admin((id.clone(), next))
                                                    },
                                                    "{label}"
                                                }
                                            }
                                            Button {
                                                variant: ButtonVariant::Destructive,
                                                size: ButtonSize::Small,
                                                onclick: {
                                                    let id = u.id.clone();
                                                    move |_| remove(id.clone())
                                                },
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
