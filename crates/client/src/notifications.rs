//! Inbox mutations. Each one calls the API first and touches the local inbox
//! only when the call succeeded.

use shared_types::{AppError, NotificationInbox};

use crate::ApiClient;

/// Somewhere a mutation can commit its local change.
///
/// The inbox is only borrowed inside `with_inbox`, never across an await,
/// so concurrent mutations each apply to whatever the latest state is.
pub trait InboxCell {
    fn with_inbox<R>(&mut self, f: impl FnOnce(&mut NotificationInbox) -> R) -> R;
}

impl InboxCell for NotificationInbox {
    fn with_inbox<R>(&mut self, f: impl FnOnce(&mut NotificationInbox) -> R) -> R {
        f(self)
    }
}

pub async fn load_inbox(api: &ApiClient, user_id: &str) -> Result<NotificationInbox, AppError> {
    let fetched = api.notifications(user_id).await?;
    Ok(NotificationInbox::from_fetched(fetched))
}

pub async fn mark_read(
    api: &ApiClient,
    inbox: &mut impl InboxCell,
    id: &str,
) -> Result<(), AppError> {
    api.mark_notification_read(id).await?;
    inbox.with_inbox(|inbox| inbox.mark_read(id));
    Ok(())
}

/// Returns how many notifications moved. No request is sent when nothing is
/// unread.
pub async fn mark_all_read(
    api: &ApiClient,
    inbox: &mut impl InboxCell,
    user_id: &str,
) -> Result<usize, AppError> {
    if !inbox.with_inbox(|inbox| inbox.has_unread()) {
        return Ok(0);
    }
    api.mark_all_notifications_read(user_id).await?;
    Ok(inbox.with_inbox(NotificationInbox::mark_all_read))
}

pub async fn delete(
    api: &ApiClient,
    inbox: &mut impl InboxCell,
    id: &str,
) -> Result<(), AppError> {
    api.delete_notification(id).await?;
    inbox.with_inbox(|inbox| inbox.delete(id));
    Ok(())
}

pub async fn delete_all_read(
    api: &ApiClient,
    inbox: &mut impl InboxCell,
    user_id: &str,
) -> Result<usize, AppError> {
    if inbox.with_inbox(|inbox| inbox.read.is_empty()) {
        return Ok(0);
    }
    api.delete_read_notifications(user_id).await?;
    Ok(inbox.with_inbox(NotificationInbox::delete_all_read))
}
