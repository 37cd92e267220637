use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, ProfileUpdate, SessionAction, SessionState};

use crate::common;

#[tokio::test]
async fn test_list_users_decodes_roles() {
    let backend = common::spawn_backend().await;
    let users = backend.api().list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    let admin = users.iter().find(|u| u.id == common::ADMIN_ID).unwrap();
    assert!(admin.is_full_admin());
}

#[tokio::test]
async fn test_toggle_admin_flag() {
    let backend = common::spawn_backend().await;
    let updated = backend
        .api()
        .set_admin_flag(common::STUDENT_ID, true)
        .await
        .unwrap();
    assert!(updated.is_admin);
    // Student role with the flag is still not a full admin.
    assert!(!updated.is_full_admin());
}

#[tokio::test]
async fn test_profile_update_flows_into_session() {
    let backend = common::spawn_backend().await;
    let mut session = SessionState::default();
    let original = backend.api().list_users().await.unwrap().remove(0);
    session.reduce(SessionAction::LoginSuccess(original.clone()));

    session.reduce(SessionAction::UpdateStart);
    let update = ProfileUpdate {
        name: "Maria S. Santos".into(),
        department: Some("CCS".into()),
        level: Some("4".into()),
        gender: None,
        photo: Some("https://cdn.example.com/maria.png".into()),
    };
    let updated = backend
        .api()
        .update_profile(&original.id, &update)
        .await
        .unwrap();
    session.reduce(SessionAction::UpdateSuccess(updated));

    let user = session.current_user.unwrap();
    assert_eq!(user.id, original.id);
    assert_eq!(user.name, "Maria S. Santos");
    assert_eq!(user.level.as_deref(), Some("4"));
    assert_eq!(user.role, original.role);
}

#[tokio::test]
async fn test_failed_profile_update_keeps_user() {
    let backend = common::spawn_backend().await;
    let mut session = SessionState::default();
    let original = backend.api().list_users().await.unwrap().remove(0);
    session.reduce(SessionAction::LoginSuccess(original.clone()));

    session.reduce(SessionAction::UpdateStart);
    let err = backend
        .api()
        .update_profile("missing-user", &ProfileUpdate::default())
        .await
        .unwrap_err();
    session.reduce(SessionAction::UpdateFailure(err.message));

    assert_eq!(session.current_user, Some(original));
    assert!(session.error.is_some());
}

#[tokio::test]
async fn test_delete_user() {
    let backend = common::spawn_backend().await;
    backend.api().delete_user(common::STUDENT_ID).await.unwrap();
    assert_eq!(backend.api().list_users().await.unwrap().len(), 1);

    let err = backend
        .api()
        .delete_user(common::STUDENT_ID)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
