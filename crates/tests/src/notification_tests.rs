use std::cell::RefCell;
use std::rc::Rc;

use client::notifications::{self, InboxCell};
use pretty_assertions::assert_eq;
use shared_types::NotificationInbox;

use crate::common;

/// Inbox shared between in-flight mutations, like the app's signal.
#[derive(Clone)]
struct SharedInbox(Rc<RefCell<NotificationInbox>>);

impl InboxCell for SharedInbox {
    fn with_inbox<R>(&mut self, f: impl FnOnce(&mut NotificationInbox) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

#[tokio::test]
async fn test_inbox_partition_matches_fetch() {
    let backend = common::spawn_backend().await;
    backend.seed_notifications(
        common::STUDENT_ID,
        &[("n1", false), ("n2", true), ("n3", false), ("n4", true)],
    );
    backend.seed_notifications(common::ADMIN_ID, &[("other", false)]);

    let inbox = notifications::load_inbox(&backend.api(), common::STUDENT_ID)
        .await
        .unwrap();
    assert_eq!(inbox.total(), 4);
    assert_eq!(inbox.unread_count(), 2);
    assert_eq!(inbox.read.len(), 2);
}

#[tokio::test]
async fn test_admin_marks_three_individually() {
    let backend = common::spawn_backend().await;
    backend.seed_notifications(common::ADMIN_ID, &[("a", false), ("b", false), ("c", false)]);
    let api = backend.api();

    let mut inbox = notifications::load_inbox(&api, common::ADMIN_ID)
        .await
        .unwrap();
    let mut badge = vec![inbox.unread_count()];
    for id in ["a", "b", "c"] {
        notifications::mark_read(&api, &mut inbox, id).await.unwrap();
        badge.push(inbox.unread_count());
    }

    assert_eq!(badge, vec![3, 2, 1, 0]);
    assert_eq!(inbox.read.len(), 3);

    // Server agrees after a refetch.
    let refetched = notifications::load_inbox(&api, common::ADMIN_ID)
        .await
        .unwrap();
    assert_eq!(refetched.unread_count(), 0);
    assert_eq!(refetched.read.len(), 3);
}

#[tokio::test]
async fn test_concurrent_mark_read_keeps_both_changes() {
    let backend = common::spawn_backend().await;
    backend.seed_notifications(common::ADMIN_ID, &[("a", false), ("b", false), ("c", false)]);
    let api = backend.api();

    let loaded = notifications::load_inbox(&api, common::ADMIN_ID)
        .await
        .unwrap();
    let shared = SharedInbox(Rc::new(RefCell::new(loaded)));
    let (mut first, mut second) = (shared.clone(), shared.clone());

    let (a, b) = tokio::join!(
        notifications::mark_read(&api, &mut first, "a"),
        notifications::mark_read(&api, &mut second, "b"),
    );
    a.unwrap();
    b.unwrap();

    let inbox = shared.0.borrow();
    let unread: Vec<_> = inbox.unread.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(unread, vec!["c"]);
    assert_eq!(inbox.unread_count(), 1);
    assert_eq!(inbox.read.len(), 2);
}

#[tokio::test]
async fn test_mark_all_twice_calls_api_once() {
    let backend = common::spawn_backend().await;
    backend.seed_notifications(common::STUDENT_ID, &[("x", false), ("y", false), ("z", true)]);
    let api = backend.api();
    let mut inbox = notifications::load_inbox(&api, common::STUDENT_ID)
        .await
        .unwrap();

    let moved = notifications::mark_all_read(&api, &mut inbox, common::STUDENT_ID)
        .await
        .unwrap();
    assert_eq!(moved, 2);
    assert!(inbox.unread.is_empty());

    let moved = notifications::mark_all_read(&api, &mut inbox, common::STUDENT_ID)
        .await
        .unwrap();
    assert_eq!(moved, 0);
    assert!(inbox.unread.is_empty());
    assert_eq!(inbox.read.len(), 3);

    let path = format!("PUT /notifications/{}/read-all", common::STUDENT_ID);
    assert_eq!(backend.hit_count(&path), 1);
}

#[tokio::test]
async fn test_failed_mark_read_leaves_inbox_unchanged() {
    let backend = common::spawn_backend().await;
    backend.seed_notifications(common::STUDENT_ID, &[("n1", false)]);
    let api = backend.api();
    let mut inbox = notifications::load_inbox(&api, common::STUDENT_ID)
        .await
        .unwrap();
    let before = inbox.clone();

    // Gone on the server but still in the local inbox.
    backend.state.lock().unwrap().notifications.clear();
    let result = notifications::mark_read(&api, &mut inbox, "n1").await;

    assert!(result.is_err());
    assert_eq!(inbox, before);
}

#[tokio::test]
async fn test_delete_one_and_all_read() {
    let backend = common::spawn_backend().await;
    backend.seed_notifications(
        common::STUDENT_ID,
        &[("u1", false), ("r1", true), ("r2", true), ("r3", true)],
    );
    let api = backend.api();
    let mut inbox = notifications::load_inbox(&api, common::STUDENT_ID)
        .await
        .unwrap();

    notifications::delete(&api, &mut inbox, "r1").await.unwrap();
    assert_eq!(inbox.read.len(), 2);

    let removed = notifications::delete_all_read(&api, &mut inbox, common::STUDENT_ID)
        .await
        .unwrap();
    assert_eq!(removed, 2);
    assert!(inbox.read.is_empty());
    assert_eq!(inbox.unread_count(), 1);

    let refetched = notifications::load_inbox(&api, common::STUDENT_ID)
        .await
        .unwrap();
    assert_eq!(refetched.total(), 1);
}

#[tokio::test]
async fn test_empty_inbox() {
    let backend = common::spawn_backend().await;
    let api = backend.api();
    let mut inbox = notifications::load_inbox(&api, "nobody").await.unwrap();
    assert_eq!(inbox, NotificationInbox::default());

    assert_eq!(
        notifications::mark_all_read(&api, &mut inbox, "nobody")
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        notifications::delete_all_read(&api, &mut inbox, "nobody")
            .await
            .unwrap(),
        0
    );
    assert_eq!(backend.hits().len(), 1);
}
