//! Role resolver: maps a session to its navigation menu and permitted tabs.
//!
//! Menus are plain data tables; the app renders them with one generic
//! sidebar component.

use crate::tab::{PermittedTabs, Tab};
use crate::user::{Role, User};

/// Icon hint for a menu entry. The app maps these to concrete icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Production,
    Transactions,
    Inventory,
    Reports,
    Users,
    Maintenance,
    Calendar,
    Orders,
    Bell,
    Profile,
    SignIn,
}

/// Where a menu link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// `/dashboard?tab=<id>`
    Tab(Tab),
    /// A public route path.
    Path(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Link {
        label: &'static str,
        icon: NavIcon,
        target: NavTarget,
    },
    Group {
        label: &'static str,
        icon: NavIcon,
        children: &'static [NavEntry],
    },
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Link { label, .. } | NavEntry::Group { label, .. } => label,
        }
    }

    /// Every tab reachable through this entry, depth first.
    pub fn tabs(&self) -> Vec<Tab> {
        match self {
            NavEntry::Link {
                target: NavTarget::Tab(tab),
                ..
            } => vec![*tab],
            NavEntry::Link { .. } => Vec::new(),
            NavEntry::Group { children, .. } => children.iter().flat_map(NavEntry::tabs).collect(),
        }
    }

    /// True when the entry (or one of its children) points at `current`.
    pub fn is_active(&self, current: Option<Tab>) -> bool {
        match current {
            Some(tab) => self.tabs().contains(&tab),
            None => false,
        }
    }
}

const fn tab_link(label: &'static str, icon: NavIcon, tab: Tab) -> NavEntry {
    NavEntry::Link {
        label,
        icon,
        target: NavTarget::Tab(tab),
    }
}

const TRANSACTIONS: &[NavEntry] = &[
    tab_link("Orders", NavIcon::Orders, Tab::OrdersAdmin),
    tab_link("Rentals", NavIcon::Orders, Tab::RentalsAdmin),
    tab_link("Commercial Jobs", NavIcon::Orders, Tab::CommercialJobAdmin),
];

const INVENTORY: &[NavEntry] = &[
    tab_link("Raw Materials", NavIcon::Inventory, Tab::RawMaterials),
    tab_link("Finished Products", NavIcon::Inventory, Tab::FinishedProducts),
];

const REPORTS: &[NavEntry] = &[
    tab_link("Accomplishment", NavIcon::Reports, Tab::AccomplishmentReport),
    tab_link("Sales", NavIcon::Reports, Tab::SalesReport),
];

pub const ADMIN_MENU: &[NavEntry] = &[
    tab_link("Dashboard", NavIcon::Dashboard, Tab::HomeAdmin),
    tab_link("Productions", NavIcon::Production, Tab::Productions),
    NavEntry::Group {
        label: "Transactions",
        icon: NavIcon::Transactions,
        children: TRANSACTIONS,
    },
    NavEntry::Group {
        label: "Inventory",
        icon: NavIcon::Inventory,
        children: INVENTORY,
    },
    NavEntry::Group {
        label: "Reports",
        icon: NavIcon::Reports,
        children: REPORTS,
    },
    tab_link("Users", NavIcon::Users, Tab::Users),
    tab_link("System Maintenance", NavIcon::Maintenance, Tab::SystemMaintenance),
    tab_link("Notifications", NavIcon::Bell, Tab::Notifications),
    tab_link("Profile", NavIcon::Profile, Tab::Profile),
];

pub const STUDENT_MENU: &[NavEntry] = &[
    tab_link("Dashboard", NavIcon::Dashboard, Tab::Home),
    tab_link("Orders & Appointments", NavIcon::Orders, Tab::Orders),
    tab_link("Schedules", NavIcon::Calendar, Tab::Schedules),
    tab_link("Notifications", NavIcon::Bell, Tab::Notifications),
    tab_link("Profile", NavIcon::Profile, Tab::Profile),
];

pub const COORDINATOR_MENU: &[NavEntry] = &[
    tab_link("Dashboard", NavIcon::Dashboard, Tab::Home),
    tab_link("Rentals", NavIcon::Orders, Tab::Rentals),
    tab_link("Schedules", NavIcon::Calendar, Tab::Schedules),
    tab_link("Notifications", NavIcon::Bell, Tab::Notifications),
    tab_link("Profile", NavIcon::Profile, Tab::Profile),
];

pub const COMMERCIAL_JOB_MENU: &[NavEntry] = &[
    tab_link("Dashboard", NavIcon::Dashboard, Tab::Home),
    tab_link("Commercial Jobs", NavIcon::Orders, Tab::CommercialJob),
    tab_link("Schedules", NavIcon::Calendar, Tab::Schedules),
    tab_link("Notifications", NavIcon::Bell, Tab::Notifications),
    tab_link("Profile", NavIcon::Profile, Tab::Profile),
];

/// Signed in, but the role grants no dashboard of its own.
pub const MINIMAL_MENU: &[NavEntry] = &[
    tab_link("Dashboard", NavIcon::Dashboard, Tab::Home),
    tab_link("Profile", NavIcon::Profile, Tab::Profile),
];

pub const GUEST_MENU: &[NavEntry] = &[
    NavEntry::Link {
        label: "Home",
        icon: NavIcon::Dashboard,
        target: NavTarget::Path("/"),
    },
    NavEntry::Link {
        label: "Sign In",
        icon: NavIcon::SignIn,
        target: NavTarget::Path("/sign-in"),
    },
];

/// Navigation derived from the current session. Recomputed on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNav {
    pub menu: &'static [NavEntry],
    pub permitted: PermittedTabs,
}

impl ResolvedNav {
    /// Landing tab for `/dashboard` without a `tab` parameter.
    pub fn default_tab(&self) -> Option<Tab> {
        self.menu.iter().flat_map(NavEntry::tabs).next()
    }

    pub fn permits(&self, tab: Tab) -> bool {
        self.permitted.contains(&tab)
    }
}

/// Pick the menu table for a session.
pub fn menu_for(user: Option<&User>) -> &'static [NavEntry] {
    let Some(user) = user else {
        return GUEST_MENU;
    };
    match user.role {
        Role::Admin if user.is_admin => ADMIN_MENU,
        Role::Student => STUDENT_MENU,
        Role::Coordinator => COORDINATOR_MENU,
        Role::CommercialJob | Role::Jo => COMMERCIAL_JOB_MENU,
        Role::Admin | Role::Unknown => MINIMAL_MENU,
    }
}

/// Resolve the menu and the permitted tab set for a session.
///
/// The permitted set is exactly the tabs the menu links to.
pub fn resolve(user: Option<&User>) -> ResolvedNav {
    let menu = menu_for(user);
    let permitted = menu.iter().flat_map(NavEntry::tabs).collect();
    ResolvedNav { menu, permitted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::{TabOutcome, TabRoute, ALL_TABS};
    use crate::user::ALL_ROLES;

    fn user(role: Role, is_admin: bool) -> User {
        User {
            id: "u1".into(),
            name: "Test User".into(),
            email: "test@example.com".into(),
            role,
            is_admin,
            photo: None,
            department: None,
            level: None,
            gender: None,
            verified: true,
        }
    }

    fn collect_labels(entries: &[NavEntry]) -> Vec<&'static str> {
        entries
            .iter()
            .flat_map(|e| match e {
                NavEntry::Link { label, .. } => vec![*label],
                NavEntry::Group {
                    label, children, ..
                } => {
                    let mut v = vec![*label];
                    v.extend(collect_labels(children));
                    v
                }
            })
            .collect()
    }

    #[test]
    fn guest_gets_public_links_and_no_tabs() {
        let nav = resolve(None);
        assert_eq!(nav.menu, GUEST_MENU);
        assert!(nav.permitted.is_empty());
        assert_eq!(nav.default_tab(), None);
        assert_eq!(collect_labels(nav.menu), vec!["Home", "Sign In"]);
    }

    #[test]
    fn full_admin_sees_every_admin_section() {
        let nav = resolve(Some(&user(Role::Admin, true)));
        let labels = collect_labels(nav.menu);
        for expected in [
            "Dashboard",
            "Productions",
            "Transactions",
            "Orders",
            "Rentals",
            "Commercial Jobs",
            "Inventory",
            "Raw Materials",
            "Finished Products",
            "Reports",
            "Accomplishment",
            "Sales",
            "Users",
            "System Maintenance",
        ] {
            assert!(labels.contains(&expected), "missing {expected}");
        }
        assert_eq!(nav.default_tab(), Some(Tab::HomeAdmin));
    }

    #[test]
    fn admin_role_without_flag_gets_minimal_menu() {
        let nav = resolve(Some(&user(Role::Admin, false)));
        assert_eq!(nav.menu, MINIMAL_MENU);
        assert!(!nav.permits(Tab::HomeAdmin));
        assert!(!nav.permits(Tab::SystemMaintenance));
    }

    #[test]
    fn student_never_sees_admin_tabs() {
        for is_admin in [false, true] {
            let nav = resolve(Some(&user(Role::Student, is_admin)));
            assert!(nav.permits(Tab::Orders));
            assert!(nav.permits(Tab::Schedules));
            for tab in [
                Tab::SystemMaintenance,
                Tab::HomeAdmin,
                Tab::Users,
                Tab::RawMaterials,
                Tab::SalesReport,
            ] {
                assert!(!nav.permits(tab), "student permitted {tab:?}");
            }
        }
    }

    #[test]
    fn coordinator_gets_rentals_and_schedules() {
        let nav = resolve(Some(&user(Role::Coordinator, false)));
        assert!(nav.permits(Tab::Rentals));
        assert!(nav.permits(Tab::Schedules));
        assert!(!nav.permits(Tab::Orders));
        assert!(!nav.permits(Tab::RentalsAdmin));
    }

    #[test]
    fn commercial_job_and_jo_share_a_menu() {
        let cj = resolve(Some(&user(Role::CommercialJob, false)));
        let jo = resolve(Some(&user(Role::Jo, false)));
        assert_eq!(cj, jo);
        assert!(cj.permits(Tab::CommercialJob));
        assert!(!cj.permits(Tab::CommercialJobAdmin));
    }

    #[test]
    fn unknown_role_gets_minimal_menu() {
        let nav = resolve(Some(&user(Role::Unknown, true)));
        assert_eq!(nav.menu, MINIMAL_MENU);
    }

    #[test]
    fn permitted_set_matches_menu_links_for_every_pair() {
        for role in ALL_ROLES.iter().copied().chain([Role::Unknown]) {
            for is_admin in [false, true] {
                let nav = resolve(Some(&user(role, is_admin)));
                let linked: PermittedTabs = nav.menu.iter().flat_map(NavEntry::tabs).collect();
                assert_eq!(linked, nav.permitted, "{role:?}/{is_admin}");
                assert!(nav.default_tab().is_some());
            }
        }
    }

    #[test]
    fn only_full_admin_reaches_admin_only_tabs() {
        let admin_only = [
            Tab::HomeAdmin,
            Tab::Users,
            Tab::SystemMaintenance,
            Tab::OrdersAdmin,
            Tab::RawMaterials,
        ];
        for role in ALL_ROLES.iter().copied() {
            for is_admin in [false, true] {
                let u = user(role, is_admin);
                let nav = resolve(Some(&u));
                for tab in admin_only {
                    assert_eq!(nav.permits(tab), u.is_full_admin(), "{role:?}/{tab:?}");
                }
            }
        }
    }

    #[test]
    fn student_deep_link_to_admin_home_is_not_found() {
        let nav = resolve(Some(&user(Role::Student, false)));
        let route = TabRoute::from_query(Some("home-admin"));
        assert_eq!(route.outcome(&nav.permitted), TabOutcome::NotFound);
    }

    #[test]
    fn every_tab_is_reachable_by_some_session() {
        let mut reachable = PermittedTabs::new();
        for role in ALL_ROLES.iter().copied() {
            for is_admin in [false, true] {
                reachable.extend(resolve(Some(&user(role, is_admin))).permitted);
            }
        }
        for tab in ALL_TABS {
            assert!(reachable.contains(tab), "{tab:?} unreachable");
        }
    }

    #[test]
    fn group_is_active_when_child_selected() {
        let transactions = ADMIN_MENU
            .iter()
            .find(|e| e.label() == "Transactions")
            .unwrap();
        assert!(transactions.is_active(Some(Tab::RentalsAdmin)));
        assert!(!transactions.is_active(Some(Tab::Users)));
        assert!(!transactions.is_active(None));
    }
}
