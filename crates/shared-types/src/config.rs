use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Optional dashboard features.
///
/// Loaded from `config.toml` and provided to every route through context.
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Notification badge and the notifications tab.
    #[serde(default)]
    pub notifications: bool,
    /// Receipt links on orders and the receipt route.
    #[serde(default)]
    pub receipts: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Parse `config.toml` contents. `base_url_override` (the build-time
    /// `API_BASE_URL`) wins over the file when set and non-empty.
    pub fn load(raw: &str, base_url_override: Option<&str>) -> Result<Self, toml::de::Error> {
        let mut config: AppConfig = toml::from_str(raw)?;
        if let Some(url) = base_url_override.map(str::trim).filter(|u| !u.is_empty()) {
            config.api.base_url = url.to_string();
        }
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.notifications);
        assert!(!flags.receipts);
    }

    #[test]
    fn deserialize_empty_toml_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            receipts = true
            "#,
        )
        .unwrap();
        assert!(config.features.receipts);
        assert!(!config.features.notifications);
    }

    #[test]
    fn deserialize_full_toml() {
        let config = AppConfig::load(
            r#"
            [api]
            base_url = "https://api.example.com/v1/"

            [features]
            notifications = true
            receipts = true
            "#,
            None,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com/v1");
        assert!(config.features.notifications);
        assert!(config.features.receipts);
    }

    #[test]
    fn env_override_wins() {
        let config = AppConfig::load(
            "[api]\nbase_url = \"http://file\"",
            Some("https://prod.example.com"),
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://prod.example.com");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = AppConfig::load("", Some("  ")).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::load("[features\nnotifications = ", None).is_err());
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
