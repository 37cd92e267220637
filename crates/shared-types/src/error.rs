use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Fallback shown for transport failures and unexpected server errors.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong. Please check your connection and try again.";

const WRONG_CREDENTIALS_MESSAGE: &str = "Wrong email or password.";
const EMAIL_NOT_VERIFIED_MESSAGE: &str = "Email not verified. Please verify your email first.";
const NOT_FOUND_MESSAGE: &str = "The requested record could not be found.";

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Server,
    Transport,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Validation => write!(f, "Validation"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Server => write!(f, "Server"),
            AppErrorKind::Transport => write!(f, "Transport"),
        }
    }
}

/// Structured error carried from the API client up to the views.
///
/// `message` is always safe to show in a toast; `field_errors` feeds inline
/// form messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Shape of the error bodies the backend sends (`{"message": "..."}`).
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    #[serde(default, alias = "error")]
    message: Option<String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::Validation,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Conflict, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Server, message)
    }

    /// Network-level failure: the request never produced a response.
    pub fn transport() -> Self {
        Self::new(AppErrorKind::Transport, GENERIC_FAILURE_MESSAGE)
    }

    /// Map an HTTP status and raw response body to a user-facing error.
    ///
    /// 401 and 403 use fixed auth messages; 400/422/409 prefer the message
    /// the server sent; everything else collapses to the generic message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let server_message = serde_json::from_str::<ServerErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());

        match status {
            400 | 422 => Self::validation(
                server_message.unwrap_or_else(|| "Please check the form and try again.".into()),
                HashMap::new(),
            ),
            401 => Self::unauthorized(WRONG_CREDENTIALS_MESSAGE),
            403 => Self::forbidden(EMAIL_NOT_VERIFIED_MESSAGE),
            404 => Self::not_found(NOT_FOUND_MESSAGE),
            409 => Self::conflict(
                server_message.unwrap_or_else(|| "That record already exists.".into()),
            ),
            _ => Self::server(GENERIC_FAILURE_MESSAGE),
        }
    }

    /// True when the error means the session is no longer usable.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.kind, AppErrorKind::Unauthorized)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Please fix the highlighted fields.", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_wrong_credentials() {
        let err = AppError::from_status(401, r#"{"message":"bad password"}"#);
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, WRONG_CREDENTIALS_MESSAGE);
        assert!(err.is_auth_failure());
    }

    #[test]
    fn forbidden_maps_to_email_not_verified() {
        let err = AppError::from_status(403, "");
        assert_eq!(err.kind, AppErrorKind::Forbidden);
        assert_eq!(err.message, EMAIL_NOT_VERIFIED_MESSAGE);
    }

    #[test]
    fn bad_request_keeps_server_message() {
        let err = AppError::from_status(400, r#"{"message":"Email already taken"}"#);
        assert_eq!(err.kind, AppErrorKind::Validation);
        assert_eq!(err.message, "Email already taken");
    }

    #[test]
    fn bad_request_accepts_error_alias() {
        let err = AppError::from_status(422, r#"{"error":"Quantity must be positive"}"#);
        assert_eq!(err.message, "Quantity must be positive");
    }

    #[test]
    fn bad_request_without_body_uses_fallback() {
        let err = AppError::from_status(400, "not json");
        assert_eq!(err.message, "Please check the form and try again.");
    }

    #[test]
    fn not_found_is_generic() {
        let err = AppError::from_status(404, r#"{"message":"Order 12 missing"}"#);
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, NOT_FOUND_MESSAGE);
    }

    #[test]
    fn server_and_unknown_statuses_collapse_to_generic() {
        for status in [500, 502, 503, 418] {
            let err = AppError::from_status(status, r#"{"message":"stack trace"}"#);
            assert_eq!(err.kind, AppErrorKind::Server);
            assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn transport_error_uses_generic_message() {
        let err = AppError::transport();
        assert_eq!(err.kind, AppErrorKind::Transport);
        assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::conflict("duplicate");
        assert_eq!(format!("{}", err), "Conflict: duplicate");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "invalid format".to_string());
        let err = AppError::validation("Validation failed", fields);
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
