//! Dashboard tab identifiers and the `?tab=` routing state machine.

use std::collections::BTreeSet;

/// Every dashboard view the client knows how to render.
///
/// The set of variants is the master allow-list: a `tab` query value that
/// does not parse into one of these renders the not-found view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tab {
    Home,
    HomeAdmin,
    Productions,
    Orders,
    OrdersAdmin,
    Rentals,
    RentalsAdmin,
    CommercialJob,
    CommercialJobAdmin,
    RawMaterials,
    FinishedProducts,
    AccomplishmentReport,
    SalesReport,
    Users,
    SystemMaintenance,
    Schedules,
    Profile,
    Notifications,
}

pub const ALL_TABS: &[Tab] = &[
    Tab::Home,
    Tab::HomeAdmin,
    Tab::Productions,
    Tab::Orders,
    Tab::OrdersAdmin,
    Tab::Rentals,
    Tab::RentalsAdmin,
    Tab::CommercialJob,
    Tab::CommercialJobAdmin,
    Tab::RawMaterials,
    Tab::FinishedProducts,
    Tab::AccomplishmentReport,
    Tab::SalesReport,
    Tab::Users,
    Tab::SystemMaintenance,
    Tab::Schedules,
    Tab::Profile,
    Tab::Notifications,
];

impl Tab {
    /// Query-string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::HomeAdmin => "home-admin",
            Tab::Productions => "productions",
            Tab::Orders => "orders",
            Tab::OrdersAdmin => "orders-admin",
            Tab::Rentals => "rentals",
            Tab::RentalsAdmin => "rentals-admin",
            Tab::CommercialJob => "commercial-job",
            Tab::CommercialJobAdmin => "commercial-job-admin",
            Tab::RawMaterials => "raw-materials",
            Tab::FinishedProducts => "finished-products",
            Tab::AccomplishmentReport => "accomplishment-report",
            Tab::SalesReport => "sales-report",
            Tab::Users => "users",
            Tab::SystemMaintenance => "system-maintenance",
            Tab::Schedules => "schedules",
            Tab::Profile => "profile",
            Tab::Notifications => "notifications",
        }
    }

    /// Exact, case-sensitive lookup against the master allow-list.
    pub fn parse(s: &str) -> Option<Self> {
        ALL_TABS.iter().copied().find(|t| t.as_str() == s)
    }

    /// Title shown in the dashboard navbar.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home | Tab::HomeAdmin => "Dashboard",
            Tab::Productions => "Productions",
            Tab::Orders => "Orders & Appointments",
            Tab::OrdersAdmin => "Orders",
            Tab::Rentals | Tab::RentalsAdmin => "Rentals",
            Tab::CommercialJob | Tab::CommercialJobAdmin => "Commercial Jobs",
            Tab::RawMaterials => "Raw Materials",
            Tab::FinishedProducts => "Finished Products",
            Tab::AccomplishmentReport => "Accomplishment Report",
            Tab::SalesReport => "Sales Report",
            Tab::Users => "Users",
            Tab::SystemMaintenance => "System Maintenance",
            Tab::Schedules => "Schedules",
            Tab::Profile => "Profile",
            Tab::Notifications => "Notifications",
        }
    }
}

/// Tabs a session may open, as computed by [`crate::nav::resolve`].
pub type PermittedTabs = BTreeSet<Tab>;

/// Router state derived from the `tab` query parameter on every navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRoute {
    /// No `tab` parameter (or an empty one): nothing is mounted.
    NoTab,
    Valid(Tab),
    /// Raw value kept for the not-found message.
    Invalid(String),
}

/// What the dashboard should mount for a given route and session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome {
    Nothing,
    Render(Tab),
    NotFound,
}

impl TabRoute {
    pub fn from_query(tab: Option<&str>) -> Self {
        match tab.map(str::trim) {
            None | Some("") => TabRoute::NoTab,
            Some(raw) => match Tab::parse(raw) {
                Some(tab) => TabRoute::Valid(tab),
                None => TabRoute::Invalid(raw.to_string()),
            },
        }
    }

    /// Resolve against the session's permitted set.
    ///
    /// A tab in the master list that the session may not open is treated the
    /// same as an unknown tab, so no view mounts before a permission check.
    pub fn outcome(&self, permitted: &PermittedTabs) -> TabOutcome {
        match self {
            TabRoute::NoTab => TabOutcome::Nothing,
            TabRoute::Valid(tab) if permitted.contains(tab) => TabOutcome::Render(*tab),
            TabRoute::Valid(_) | TabRoute::Invalid(_) => TabOutcome::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_roundtrip_covers_every_tab() {
        for tab in ALL_TABS {
            assert_eq!(Tab::parse(tab.as_str()), Some(*tab));
        }
    }

    #[test]
    fn identifiers_are_unique() {
        let ids: BTreeSet<&str> = ALL_TABS.iter().map(Tab::as_str).collect();
        assert_eq!(ids.len(), ALL_TABS.len());
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(Tab::parse("Home"), None);
        assert_eq!(Tab::parse("home "), None);
        assert_eq!(Tab::parse("home-admin"), Some(Tab::HomeAdmin));
    }

    #[test]
    fn missing_or_blank_tab_is_no_tab() {
        assert_eq!(TabRoute::from_query(None), TabRoute::NoTab);
        assert_eq!(TabRoute::from_query(Some("")), TabRoute::NoTab);
        assert_eq!(TabRoute::from_query(Some("  ")), TabRoute::NoTab);
    }

    #[test]
    fn unknown_tab_is_invalid_and_not_found_for_everyone() {
        let route = TabRoute::from_query(Some("payroll"));
        assert_eq!(route, TabRoute::Invalid("payroll".into()));

        let everything: PermittedTabs = ALL_TABS.iter().copied().collect();
        assert_eq!(route.outcome(&everything), TabOutcome::NotFound);
        assert_eq!(route.outcome(&PermittedTabs::new()), TabOutcome::NotFound);
    }

    #[test]
    fn known_but_unpermitted_tab_is_not_found() {
        let permitted: PermittedTabs = [Tab::Home, Tab::Orders].into_iter().collect();
        let route = TabRoute::from_query(Some("home-admin"));
        assert_eq!(route, TabRoute::Valid(Tab::HomeAdmin));
        assert_eq!(route.outcome(&permitted), TabOutcome::NotFound);
    }

    #[test]
    fn permitted_tab_renders() {
        let permitted: PermittedTabs = [Tab::Orders].into_iter().collect();
        let route = TabRoute::from_query(Some("orders"));
        assert_eq!(route.outcome(&permitted), TabOutcome::Render(Tab::Orders));
    }

    #[test]
    fn no_tab_mounts_nothing() {
        assert_eq!(
            TabRoute::NoTab.outcome(&PermittedTabs::new()),
            TabOutcome::Nothing
        );
    }
}
