use std::sync::Arc;

use client::{MemoryStore, SessionPersistence};
use pretty_assertions::assert_eq;
use shared_types::{
    AppErrorKind, Role, SessionAction, SessionState, SignInRequest, SignUpRequest,
};

use crate::common;

#[tokio::test]
async fn test_sign_in_returns_user_and_token() {
    let backend = common::spawn_backend().await;
    let req = SignInRequest {
        email: "student@example.com".into(),
        password: "secret".into(),
    };

    let auth = backend.api().sign_in(&req).await.unwrap();
    assert_eq!(auth.token, "student-token");
    assert_eq!(auth.user.id, common::STUDENT_ID);
    assert_eq!(auth.user.role, Role::Student);
    assert_eq!(backend.hits(), vec!["POST /auth/signin"]);
}

#[tokio::test]
async fn test_wrong_password_maps_to_wrong_credentials() {
    let backend = common::spawn_backend().await;
    let req = SignInRequest {
        email: "student@example.com".into(),
        password: "nope".into(),
    };

    let err = backend.api().sign_in(&req).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Wrong email or password.");
}

#[tokio::test]
async fn test_unverified_account_maps_to_forbidden() {
    let backend = common::spawn_backend().await;
    let req = SignInRequest {
        email: "unverified@example.com".into(),
        password: "secret".into(),
    };

    let err = backend.api().sign_in(&req).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Email not verified. Please verify your email first.");
}

#[tokio::test]
async fn test_sign_in_flow_persists_session_and_token() {
    let backend = common::spawn_backend().await;
    let persistence = SessionPersistence::new(Arc::new(MemoryStore::new()));
    let mut session = SessionState::default();

    session.reduce(SessionAction::LoginStart);
    let auth = backend
        .api()
        .sign_in(&SignInRequest {
            email: "student@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    persistence.save_token(&auth.token);
    session.reduce(SessionAction::LoginSuccess(auth.user));
    persistence.save_session(&session);

    let restored = persistence.load_session();
    assert_eq!(restored.current_user, session.current_user);
    assert_eq!(persistence.token().as_deref(), Some("student-token"));

    session.reduce(SessionAction::Logout);
    persistence.clear();
    assert_eq!(persistence.token(), None);
    assert!(!persistence.load_session().is_authenticated());
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let backend = common::spawn_backend().await;
    backend
        .api_with_token("student-token")
        .sign_out()
        .await
        .unwrap();
    assert_eq!(backend.last_auth().as_deref(), Some("Bearer student-token"));
}

#[tokio::test]
async fn test_anonymous_requests_carry_no_token() {
    let backend = common::spawn_backend().await;
    backend.api().list_users().await.unwrap();
    assert_eq!(backend.last_auth(), None);
}

#[tokio::test]
async fn test_sign_up_duplicate_email_is_conflict() {
    let backend = common::spawn_backend().await;
    let req = SignUpRequest {
        name: "Maria Santos".into(),
        email: "student@example.com".into(),
        password: "longenough".into(),
        role: Role::Student,
        department: None,
        level: None,
        gender: None,
    };

    let err = backend.api().sign_up(&req).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "Email already registered");
}

#[tokio::test]
async fn test_sign_up_new_account() {
    let backend = common::spawn_backend().await;
    let req = SignUpRequest {
        name: "Juan Dela Cruz".into(),
        email: "juan@example.com".into(),
        password: "longenough".into(),
        role: Role::Coordinator,
        department: Some("CBA".into()),
        level: None,
        gender: None,
    };

    backend.api().sign_up(&req).await.unwrap();
    let users = backend.api().list_users().await.unwrap();
    let juan = users.iter().find(|u| u.email == "juan@example.com").unwrap();
    assert_eq!(juan.role, Role::Coordinator);
}
