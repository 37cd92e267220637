//! Session reducer, forgot-password flow and the persisted session blob.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the persisted session blob.
pub const PERSIST_ROOT_KEY: &str = "persist:root";
/// Storage key for the in-progress production form draft.
pub const FORM_STATE_KEY: &str = "formState";

/// Bumped whenever [`PersistedRoot`] changes shape; older blobs are dropped.
pub const PERSIST_VERSION: u32 = 2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    LoginStart,
    LoginSuccess(User),
    LoginFailure(String),
    UpdateStart,
    UpdateSuccess(User),
    UpdateFailure(String),
    Logout,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Apply one action. Every write to the session goes through here.
    pub fn reduce(&mut self, action: SessionAction) {
        match action {
            SessionAction::LoginStart | SessionAction::UpdateStart => {
                self.loading = true;
                self.error = None;
            }
            SessionAction::LoginSuccess(user) | SessionAction::UpdateSuccess(user) => {
                self.current_user = Some(user);
                self.loading = false;
                self.error = None;
            }
            SessionAction::LoginFailure(message) => {
                self.current_user = None;
                self.loading = false;
                self.error = Some(message);
            }
            // A failed profile edit must not sign the user out.
            SessionAction::UpdateFailure(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            SessionAction::Logout => {
                self.current_user = None;
                self.loading = false;
                self.error = None;
            }
        }
    }

    /// Snapshot for persistence. Transient flags are not stored.
    pub fn to_persisted(&self) -> PersistedRoot {
        PersistedRoot {
            version: PERSIST_VERSION,
            user: self.current_user.clone(),
            forgot_password_email: None,
        }
    }

    pub fn from_persisted(root: PersistedRoot) -> Self {
        Self {
            current_user: root.user,
            ..Self::default()
        }
    }
}

/// JSON blob stored under [`PERSIST_ROOT_KEY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedRoot {
    pub version: u32,
    #[serde(default)]
    pub user: Option<User>,
    /// Address of an in-progress password reset, so the OTP page survives a
    /// reload.
    #[serde(default)]
    pub forgot_password_email: Option<String>,
}

impl PersistedRoot {
    pub fn encode(&self) -> String {
        // Serializing plain data into a String cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode a stored blob. Corrupt or version-mismatched blobs yield `None`
    /// so the caller falls back to a guest session.
    pub fn decode(raw: &str) -> Option<Self> {
        let root: PersistedRoot = serde_json::from_str(raw).ok()?;
        (root.version == PERSIST_VERSION).then_some(root)
    }
}

/// Rehydrate a session from an optional stored blob.
pub fn rehydrate(raw: Option<&str>) -> SessionState {
    raw.and_then(PersistedRoot::decode)
        .map(SessionState::from_persisted)
        .unwrap_or_default()
}

/// Rehydrate the forgot-password flow from an optional stored blob. Only the
/// email survives; request status always starts idle.
pub fn rehydrate_forgot_password(raw: Option<&str>) -> ForgotPasswordState {
    ForgotPasswordState {
        email: raw
            .and_then(PersistedRoot::decode)
            .and_then(|root| root.forgot_password_email),
        ..ForgotPasswordState::default()
    }
}

/// Forgot-password flow: the email being reset plus request status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForgotPasswordState {
    pub email: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForgotPasswordAction {
    RequestStart,
    RequestSuccess(String),
    RequestFailure(String),
    Reset,
}

impl ForgotPasswordState {
    pub fn reduce(&mut self, action: ForgotPasswordAction) {
        match action {
            ForgotPasswordAction::RequestStart => {
                self.loading = true;
                self.error = None;
            }
            ForgotPasswordAction::RequestSuccess(email) => {
                self.email = Some(email);
                self.loading = false;
                self.error = None;
            }
            ForgotPasswordAction::RequestFailure(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            ForgotPasswordAction::Reset => *self = Self::default(),
        }
    }
}
