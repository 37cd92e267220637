use shared_types::{
    AppErrorKind, ForgotPasswordAction, ForgotPasswordRequest, ForgotPasswordState,
    ResetPasswordRequest, VerifyOtpRequest,
};

use crate::common;

#[tokio::test]
async fn test_full_reset_flow() {
    let backend = common::spawn_backend().await;
    let api = backend.api();
    let mut flow = ForgotPasswordState::default();

    flow.reduce(ForgotPasswordAction::RequestStart);
    let otp = api
        .forgot_password(&ForgotPasswordRequest {
            email: "student@example.com".into(),
        })
        .await
        .unwrap();
    flow.reduce(ForgotPasswordAction::RequestSuccess("student@example.com".into()));
    assert_eq!(otp.token, common::OTP_TOKEN);
    assert_eq!(flow.email.as_deref(), Some("student@example.com"));

    api.verify_otp(
        &otp.token,
        &VerifyOtpRequest {
            otp: common::VALID_OTP.into(),
        },
    )
    .await
    .unwrap();

    api.reset_password(
        &otp.token,
        &ResetPasswordRequest {
            password: "brand-new-pass".into(),
            confirm_password: "brand-new-pass".into(),
        },
    )
    .await
    .unwrap();
    flow.reduce(ForgotPasswordAction::Reset);

    assert_eq!(flow, ForgotPasswordState::default());
    assert_eq!(
        backend.hits(),
        vec![
            "POST /auth/forgot-password".to_string(),
            format!("POST /auth/verify-otp/{}", common::OTP_TOKEN),
            format!("POST /auth/reset-password/{}", common::OTP_TOKEN),
        ]
    );
}

#[tokio::test]
async fn test_wrong_otp_keeps_server_message() {
    let backend = common::spawn_backend().await;
    let err = backend
        .api()
        .verify_otp(common::OTP_TOKEN, &VerifyOtpRequest { otp: "000000".into() })
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Validation);
    assert_eq!(err.message, "Invalid code");
}

#[tokio::test]
async fn test_unknown_email_is_not_found() {
    let backend = common::spawn_backend().await;
    let mut flow = ForgotPasswordState::default();
    flow.reduce(ForgotPasswordAction::RequestStart);

    let err = backend
        .api()
        .forgot_password(&ForgotPasswordRequest {
            email: "nobody@example.com".into(),
        })
        .await
        .unwrap_err();
    flow.reduce(ForgotPasswordAction::RequestFailure(err.message.clone()));

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert!(!flow.loading);
    assert_eq!(flow.email, None);
    assert_eq!(flow.error.as_deref(), Some("The requested record could not be found."));
}

#[tokio::test]
async fn test_resend_code_returns_token() {
    let backend = common::spawn_backend().await;
    let otp = backend.api().send_otp("student@example.com").await.unwrap();
    assert_eq!(otp.token, common::OTP_TOKEN);
}
