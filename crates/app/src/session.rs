use chrono::Utc;
use client::{ApiClient, SessionPersistence};
use dioxus::prelude::*;
use shared_types::{
    resolve, AuthResponse, ForgotPasswordAction, ForgotPasswordState, ResolvedNav, SessionAction,
    SessionState, User,
};

/// Global session: the reducer state, the forgot-password flow and the
/// storage it is persisted to.
///
/// Provided once by `App` through context. Every write goes through
/// [`SessionStore::dispatch`], which persists after reducing.
#[derive(Clone, Copy)]
pub struct SessionStore {
    pub state: Signal<SessionState>,
    pub forgot_password: Signal<ForgotPasswordState>,
    persistence: Signal<SessionPersistence>,
    api: Signal<ApiClient>,
}

/// Result of checking a gated navigation against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Signed in, but the stored token is missing, unparsable or past `exp`.
    Expired,
    Anonymous,
}

/// Pure gate decision for a gated route.
pub fn access(state: &SessionState, token_expired: bool) -> Access {
    match (state.is_authenticated(), token_expired) {
        (false, _) => Access::Anonymous,
        (true, true) => Access::Expired,
        (true, false) => Access::Granted,
    }
}

impl SessionStore {
    /// Rehydrate from storage. Runs before the router renders anything.
    pub fn new(persistence: SessionPersistence, api: ApiClient) -> Self {
        let restored = persistence.restore(Utc::now());
        let forgot_password = persistence.load_forgot_password();
        if let Some(user) = &restored.current_user {
            tracing::info!(user_id = %user.id, role = %user.role.as_str(), "Session restored");
        }
        Self {
            state: Signal::new(restored),
            forgot_password: Signal::new(forgot_password),
            persistence: Signal::new(persistence),
            api: Signal::new(api),
        }
    }

    pub fn dispatch(&mut self, action: SessionAction) {
        self.state.write().reduce(action);
        self.persistence.peek().save_session(&self.state.peek());
    }

    pub fn dispatch_forgot_password(&mut self, action: ForgotPasswordAction) {
        self.forgot_password.write().reduce(action);
        self.persistence
            .peek()
            .save_forgot_password(&self.forgot_password.peek());
    }

    /// Store the token first so the next gated render sees a valid session.
    pub fn login(&mut self, response: AuthResponse) {
        self.persistence.peek().save_token(&response.token);
        tracing::info!(user_id = %response.user.id, "Signed in");
        self.dispatch(SessionAction::LoginSuccess(response.user));
    }

    pub fn logout(&mut self) {
        self.persistence.peek().clear();
        self.dispatch(SessionAction::Logout);
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().current_user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.persistence.peek().token()
    }

    /// Decide access for a gated route, logging out an expired session.
    pub fn check_access(&mut self) -> Access {
        let expired = self.persistence.peek().session_expired(Utc::now());
        let decision = access(&self.state.read(), expired);
        if decision == Access::Expired {
            tracing::info!("Session token expired, signing out");
            self.logout();
        }
        decision
    }

    /// API client carrying the current bearer token.
    pub fn api(&self) -> ApiClient {
        self.api.peek().clone().with_token(self.token())
    }

    pub fn persistence(&self) -> SessionPersistence {
        self.persistence.peek().clone()
    }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
}

/// Menu and permitted tabs for the current session. Recomputed on every
/// render that reads it.
pub fn use_nav() -> ResolvedNav {
    let session = use_session();
    let state = session.state.read();
    resolve(state.current_user.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Role;

    fn signed_in() -> SessionState {
        SessionState {
            current_user: Some(User {
                id: "u1".into(),
                name: "Ana Reyes".into(),
                email: "ana@example.com".into(),
                role: Role::Student,
                is_admin: false,
                photo: None,
                department: None,
                level: None,
                gender: None,
                verified: true,
            }),
            ..SessionState::default()
        }
    }

    #[test]
    fn anonymous_is_sent_to_sign_in() {
        assert_eq!(access(&SessionState::default(), false), Access::Anonymous);
        assert_eq!(access(&SessionState::default(), true), Access::Anonymous);
    }

    #[test]
    fn signed_in_with_valid_token_is_granted() {
        assert_eq!(access(&signed_in(), false), Access::Granted);
    }

    #[test]
    fn signed_in_with_expired_token_is_expired() {
        assert_eq!(access(&signed_in(), true), Access::Expired);
    }
}
