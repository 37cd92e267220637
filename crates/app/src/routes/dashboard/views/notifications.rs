use dioxus::prelude::*;
use shared_types::Notification;
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    CountBadge, PageHeader, SkeletonTable, ToastOptions,
};

use super::{viewer_id, LoadError};
use crate::components::notification_badge::use_notifications;
use crate::format_helpers::format_datetime;
use crate::session::use_session;
use crate::use_features;

/// Full inbox: unread on top, read below, with per-item and bulk actions.
/// Shares its state with the navbar badge.
#[component]
pub fn NotificationsView() -> Element {
    let session = use_session();
    let features = use_features();
    let center = use_notifications();
    let toast = use_toast();

    if !features.notifications {
        return rsx! {
            div { class: "container",
                PageHeader { title: "Notifications" }
                p { class: "muted", "Notifications are turned off." }
            }
        };
    }

    let mark_read = move |id: String| {
        let api = session.api();
        spawn(async move {
            if let Err(e) = center.mark_read(api, id).await {
                toast.error(e.message, ToastOptions::new());
            }
        });
    };

    let delete = move |id: String| {
        let api = session.api();
        spawn(async move {
            if let Err(e) = center.delete(api, id).await {
                toast.error(e.message, ToastOptions::new());
            }
        });
    };

    let mark_all = move |_| {
        let api = session.api();
        let user_id = viewer_id(&session);
        spawn(async move {
            match center.mark_all_read(api, user_id).await {
                Ok(0) => {}
                Ok(moved) => toast.success(format!("{moved} marked as read."), ToastOptions::new()),
                Err(e) => toast.error(e.message, ToastOptions::new()),
            }
        });
    };

    let clear_read = move |_| {
        let api = session.api();
        let user_id = viewer_id(&session);
        spawn(async move {
            match center.delete_all_read(api, user_id).await {
                Ok(0) => {}
                Ok(removed) => toast.success(format!("{removed} removed."), ToastOptions::new()),
                Err(e) => toast.error(e.message, ToastOptions::new()),
            }
        });
    };

    if *center.loading.read() && center.inbox.read().total() == 0 {
        return rsx! {
            div { class: "container",
                PageHeader { title: "Notifications" }
                SkeletonTable { rows: 4 }
            }
        };
    }

    if let Some(message) = center.error.read().clone() {
        return rsx! {
            div { class: "container",
                PageHeader { title: "Notifications" }
                LoadError { message }
            }
        };
    }

    let inbox = center.inbox.read();

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Notifications",
                description: format!("{} total", inbox.total()),
                actions: rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !inbox.has_unread(),
                        onclick: mark_all,
                        "Mark all as read"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: inbox.read.is_empty(),
                        onclick: clear_read,
                        "Delete read"
                    }
                },
            }

            Card {
                CardHeader {
                    div { class: "row-actions",
                        CardTitle { "Unread" }
                        CountBadge { count: inbox.unread_count() }
                    }
                }
                CardContent {
                    if inbox.unread.is_empty() {
                        p { class: "muted", "You're all caught up." }
                    }
                    ul { class: "notification-list",
                        for n in inbox.unread.iter() {
                            NotificationItem {
                                key: "{n.id}",
                                notification: n.clone(),
                                on_mark_read: move |id| mark_read(id),
                                on_delete: move |id| delete(id),
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Read" } }
                CardContent {
                    if inbox.read.is_empty() {
                        p { class: "muted", "No read notifications." }
                    }
                    ul { class: "notification-list",
                        for n in inbox.read.iter() {
                            NotificationItem {
                                key: "{n.id}",
                                notification: n.clone(),
                                on_delete: move |id| delete(id),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NotificationItem(
    notification: Notification,
    #[props(default)] on_mark_read: Option<EventHandler<String>>,
    on_delete: EventHandler<String>,
) -> Element {
    let id = notification.id.clone();

    rsx! {
        li { class: if notification.read { "notification-item" } else { "notification-item unread" },
            div { class: "notification-body",
                strong { "{notification.title}" }
                p { "{notification.message}" }
                span { class: "muted", {format_datetime(&notification.created_at)} }
            }
            div { class: "row-actions",
                if let Some(handler) = on_mark_read {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: {
                            let id = id.clone();
                            move |_| handler.call(id.clone())
                        },
                        "Mark read"
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}
