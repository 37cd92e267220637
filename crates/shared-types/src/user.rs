use serde::{Deserialize, Serialize};

/// Account role as issued by the backend.
///
/// Unknown strings deserialize to [`Role::Unknown`] instead of failing so a
/// stale or malformed record still yields a usable (minimal) menu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Student,
    Coordinator,
    CommercialJob,
    /// Job-order account; shares the commercial-job dashboard.
    Jo,
    #[default]
    Unknown,
}

/// All roles a backend can hand out, in display order.
pub const ALL_ROLES: &[Role] = &[
    Role::Admin,
    Role::Student,
    Role::Coordinator,
    Role::CommercialJob,
    Role::Jo,
];

impl Role {
    /// Parse a role string case-insensitively. Unknown values map to `Unknown`.
    pub fn from_str_or_unknown(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "student" => Role::Student,
            "coordinator" => Role::Coordinator,
            "commercialjob" | "commercial-job" | "commercial_job" => Role::CommercialJob,
            "jo" => Role::Jo,
            _ => Role::Unknown,
        }
    }

    /// Wire string, matching what the backend stores.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
            Role::Coordinator => "Coordinator",
            Role::CommercialJob => "CommercialJob",
            Role::Jo => "JO",
            Role::Unknown => "",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
            Role::Coordinator => "Coordinator",
            Role::CommercialJob => "Commercial Job",
            Role::Jo => "Job Order",
            Role::Unknown => "Unassigned",
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from_str_or_unknown(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// Signed-in account as returned by the backend and kept in the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

impl User {
    /// Full admin dashboard requires both the role and the flag.
    pub fn is_full_admin(&self) -> bool {
        self.role == Role::Admin && self.is_admin
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Body returned by sign-in: the user plus the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Sign-in form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SignInRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Sign-up form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SignUpRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Request a one-time password for the forgot-password flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ForgotPasswordRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
}

/// Response to a forgot-password request: the token used by the OTP and
/// reset routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OtpTokenResponse {
    pub token: String,
}

/// One-time password entered on the OTP verification page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct VerifyOtpRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(equal = 6, message = "The code has 6 digits"))
    )]
    pub otp: String,
}

/// New password submitted on the reset page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ResetPasswordRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(must_match(other = "password", message = "Passwords do not match"))
    )]
    pub confirm_password: String,
}

/// Editable profile attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ProfileUpdate {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(url(message = "Photo must be a URL"))
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Admin-side change to another user's admin flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminFlagUpdate {
    pub is_admin: bool,
}
