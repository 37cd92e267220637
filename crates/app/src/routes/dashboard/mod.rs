pub mod views;

use dioxus::prelude::*;
use shared_types::{ResolvedNav, Tab, TabOutcome, TabRoute};

use crate::routes::not_found::NotFoundView;
use crate::routes::tab_route;
use crate::session::use_nav;

/// What `/dashboard?tab=...` shows for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DashboardView {
    Show(Tab),
    /// No tab in the URL: send the user to the role's landing tab.
    RedirectTo(Tab),
    /// No tab and no landing tab (minimal menus always have one, so this
    /// is only reachable with an empty menu).
    Empty,
    NotFound(String),
}

fn select_view(tab: Option<&str>, nav: &ResolvedNav) -> DashboardView {
    let route = TabRoute::from_query(tab);
    match route.outcome(&nav.permitted) {
        TabOutcome::Render(tab) => DashboardView::Show(tab),
        TabOutcome::Nothing => match nav.default_tab() {
            Some(tab) => DashboardView::RedirectTo(tab),
            None => DashboardView::Empty,
        },
        TabOutcome::NotFound => {
            let raw = tab.unwrap_or_default().trim().to_string();
            DashboardView::NotFound(format!("/dashboard?tab={raw}"))
        }
    }
}

/// Tab router. Permission is checked here, before any view mounts: a tab
/// outside the session's permitted set renders the same 404 as an unknown
/// tab.
#[component]
pub fn Dashboard(tab: Option<String>) -> Element {
    let nav = use_nav();

    match select_view(tab.as_deref(), &nav) {
        DashboardView::Show(tab) => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
            TabView { tab }
        },
        DashboardView::RedirectTo(tab) => {
            navigator().replace(tab_route(tab));
            rsx! {}
        }
        DashboardView::Empty => rsx! {},
        DashboardView::NotFound(path) => rsx! { NotFoundView { path } },
    }
}

#[component]
fn TabView(tab: Tab) -> Element {
    use views::*;

    match tab {
        Tab::Home => rsx! { home::HomeView {} },
        Tab::HomeAdmin => rsx! { home_admin::HomeAdminView {} },
        Tab::Productions => rsx! { productions::ProductionsView {} },
        Tab::Orders => rsx! { orders::OrdersView {} },
        Tab::OrdersAdmin => rsx! { orders_admin::OrdersAdminView {} },
        Tab::Rentals => rsx! { rentals::RentalsView {} },
        Tab::RentalsAdmin => rsx! { rentals_admin::RentalsAdminView {} },
        Tab::CommercialJob => rsx! { commercial_job::CommercialJobView {} },
        Tab::CommercialJobAdmin => rsx! { commercial_job_admin::CommercialJobAdminView {} },
        Tab::RawMaterials => rsx! { raw_materials::RawMaterialsView {} },
        Tab::FinishedProducts => rsx! { finished_products::FinishedProductsView {} },
        Tab::AccomplishmentReport => rsx! { accomplishment_report::AccomplishmentReportView {} },
        Tab::SalesReport => rsx! { sales_report::SalesReportView {} },
        Tab::Users => rsx! { users::UsersView {} },
        Tab::SystemMaintenance => rsx! { system_maintenance::SystemMaintenanceView {} },
        Tab::Schedules => rsx! { schedules::SchedulesView {} },
        Tab::Profile => rsx! { profile::ProfileView {} },
        Tab::Notifications => rsx! { notifications::NotificationsView {} },
    }
}
