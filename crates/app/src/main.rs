use client::{platform_store, ApiClient, SessionPersistence};
use dioxus::prelude::*;
use shared_types::{AppConfig, FeatureFlags};

mod components;
mod format_helpers;
mod forms;
mod routes;
mod session;

use routes::Route;
use session::SessionStore;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Embedded at build time; `API_BASE_URL` in the build environment wins.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    match AppConfig::load(CONFIG_TOML, option_env!("API_BASE_URL")) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid config.toml, falling back to defaults");
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    use_context_provider(|| config.features);
    use_context_provider(|| config.clone());

    // Rehydrate before the router mounts so gated routes see the stored user.
    use_context_provider(|| {
        tracing::info!(base_url = %config.api.base_url, "Starting dashboard client");
        SessionStore::new(
            SessionPersistence::new(platform_store()),
            ApiClient::new(config.api.base_url.clone()),
        )
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

/// Feature flags from context.
pub fn use_features() -> FeatureFlags {
    use_context::<FeatureFlags>()
}
