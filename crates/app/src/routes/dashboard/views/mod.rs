//! One view per dashboard tab. Views are only mounted by the tab router after
//! the permission check, so none of them re-check the role.

pub mod accomplishment_report;
pub mod commercial_job;
pub mod commercial_job_admin;
pub mod finished_products;
pub mod home;
pub mod home_admin;
pub mod notifications;
pub mod orders;
pub mod orders_admin;
pub mod productions;
pub mod profile;
pub mod raw_materials;
pub mod rentals;
pub mod rentals_admin;
pub mod sales_report;
pub mod schedules;
pub mod system_maintenance;
pub mod users;

use dioxus::prelude::*;
use shared_ui::{Card, CardContent};

use crate::session::SessionStore;

/// Owned header row for `DataTable`.
pub(crate) fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|c| c.to_string()).collect()
}

/// Id of the signed-in user, or empty when the session was just cleared.
///
/// Reads the state signal, so resources calling it refetch when the user
/// changes.
pub(crate) fn viewer_id(session: &SessionStore) -> String {
    session
        .state
        .read()
        .current_user
        .as_ref()
        .map(|u| u.id.clone())
        .unwrap_or_default()
}

/// Failed fetch in place of a table.
#[component]
pub(crate) fn LoadError(message: String) -> Element {
    rsx! {
        Card {
            CardContent {
                p { class: "muted", "{message}" }
            }
        }
    }
}
