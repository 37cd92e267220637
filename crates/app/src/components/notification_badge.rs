use client::notifications::{self, InboxCell};
use client::ApiClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdBell;
use dioxus_free_icons::Icon;
use shared_types::{AppError, NotificationInbox, Tab};
use shared_ui::{use_toast, CountBadge, ToastOptions};

use crate::routes::tab_route;
use crate::session::use_session;
use crate::use_features;

/// Inbox shared by the navbar badge and the notifications tab.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    pub inbox: Signal<NotificationInbox>,
    pub loading: Signal<bool>,
    /// Message from the last failed fetch, cleared by the next success.
    pub error: Signal<Option<String>>,
}

/// Provide the inbox for the dashboard and keep it loaded for the viewing
/// user. Refetches whenever the signed-in user's id changes.
pub fn use_notification_provider() -> NotificationCenter {
    let session = use_session();
    let features = use_features();
    let toast = use_toast();
    let center = use_context_provider(|| NotificationCenter {
        inbox: Signal::new(NotificationInbox::default()),
        loading: Signal::new(false),
        error: Signal::new(None),
    });

    let user_id = use_memo(move || {
        session
            .state
            .read()
            .current_user
            .as_ref()
            .map(|u| u.id.clone())
    });

    use_effect(move || {
        let mut center = center;
        let Some(uid) = user_id() else {
            center.inbox.set(NotificationInbox::default());
            center.error.set(None);
            return;
        };
        if !features.notifications {
            return;
        }
        center.loading.set(true);
        let api = session.api();
        spawn(async move {
            let result = notifications::load_inbox(&api, &uid).await;
            if let Err(e) = &result {
                tracing::warn!(user_id = %uid, error = %e, "Failed to load notifications");
            }
            let (inbox, error) = settle_fetch(result);
            if let Some(message) = &error {
                toast.error(message.clone(), ToastOptions::new());
            }
            center.inbox.set(inbox);
            center.error.set(error);
            center.loading.set(false);
        });
    });

    center
}

/// Inbox and error to show after a fetch. A failed fetch shows no stale
/// entries, only the error.
fn settle_fetch(result: Result<NotificationInbox, AppError>) -> (NotificationInbox, Option<String>) {
    match result {
        Ok(inbox) => (inbox, None),
        Err(e) => (NotificationInbox::default(), Some(e.message)),
    }
}

pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>()
}

impl InboxCell for NotificationCenter {
    fn with_inbox<R>(&mut self, f: impl FnOnce(&mut NotificationInbox) -> R) -> R {
        f(&mut *self.inbox.write())
    }
}

// Mutations commit into the live signal once the API call succeeds.
impl NotificationCenter {
    pub async fn mark_read(mut self, api: ApiClient, id: String) -> Result<(), AppError> {
        notifications::mark_read(&api, &mut self, &id).await
    }

    pub async fn mark_all_read(mut self, api: ApiClient, user_id: String) -> Result<usize, AppError> {
        notifications::mark_all_read(&api, &mut self, &user_id).await
    }

    pub async fn delete(mut self, api: ApiClient, id: String) -> Result<(), AppError> {
        notifications::delete(&api, &mut self, &id).await
    }

    pub async fn delete_all_read(mut self, api: ApiClient, user_id: String) -> Result<usize, AppError> {
        notifications::delete_all_read(&api, &mut self, &user_id).await
    }
}

/// Bell with the unread count, linking to the notifications tab.
#[component]
pub fn NotificationBadge() -> Element {
    let center = use_notifications();
    let unread = center.inbox.read().unread_count();

    rsx! {
        Link {
            to: tab_route(Tab::Notifications),
            class: "notification-badge",
            Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
            span { class: "sr-only", "Notifications" }
            CountBadge { count: unread }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_surfaces_message() {
        let (inbox, error) = settle_fetch(Err(AppError::server("Notifications are unavailable")));
        assert_eq!(inbox, NotificationInbox::default());
        assert_eq!(error.as_deref(), Some("Notifications are unavailable"));
    }

    #[test]
    fn successful_fetch_clears_error() {
        let (inbox, error) = settle_fetch(Ok(NotificationInbox::default()));
        assert_eq!(inbox.total(), 0);
        assert_eq!(error, None);
    }
}
