pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod not_found;
pub mod otp_verification;
pub mod receipt;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdCalendar, LdFileText, LdFolder, LdLayoutDashboard,
    LdPackage, LdSettings, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{NavEntry, NavIcon, NavTarget, Tab, TabRoute};
use shared_ui::{
    Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuGroup, SidebarMenuItem, SidebarMenuSubButton,
    SidebarMenuSubItem, SidebarProvider, SidebarTrigger, UserAvatar,
};

use crate::components::notification_badge::{use_notification_provider, NotificationBadge};
use crate::session::{use_nav, use_session, Access};
use crate::use_features;

use dashboard::Dashboard;
use forgot_password::ForgotPassword;
use home::Home;
use not_found::NotFound;
use otp_verification::OtpVerification;
use receipt::Receipt;
use reset_password::ResetPassword;
use sign_in::SignIn;
use sign_up::SignUp;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/sign-up")]
    SignUp {},
    #[route("/sign-in")]
    SignIn {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/otp-verification/:token")]
    OtpVerification { token: String },
    #[route("/reset-password/:token")]
    ResetPassword { token: String },
    #[layout(AuthGuard)]
    #[layout(DashboardLayout)]
    #[route("/dashboard?:tab")]
    Dashboard { tab: Option<String> },
    #[route("/orders/receipts/:order_id")]
    Receipt { order_id: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Link target for a dashboard tab.
pub fn tab_route(tab: Tab) -> Route {
    Route::Dashboard {
        tab: Some(tab.as_str().to_string()),
    }
}

/// Gate for `/dashboard` and `/orders/receipts/:id`.
///
/// Re-evaluated on every navigation: an expired token signs the user out
/// and redirects, same as an anonymous visit.
#[component]
fn AuthGuard() -> Element {
    let mut session = use_session();
    // Subscribes the guard to route changes.
    let _route = use_route::<Route>();

    match session.check_access() {
        Access::Granted => rsx! { Outlet::<Route> {} },
        Access::Expired | Access::Anonymous => {
            navigator().replace(Route::SignIn {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to sign in..." }
                }
            }
        }
    }
}

/// Current tab for menu highlighting, if the route is a valid tab.
fn active_tab(route: &Route) -> Option<Tab> {
    match route {
        Route::Dashboard { tab } => match TabRoute::from_query(tab.as_deref()) {
            TabRoute::Valid(tab) => Some(tab),
            TabRoute::NoTab | TabRoute::Invalid(_) => None,
        },
        _ => None,
    }
}

fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Receipt { .. } => "Receipt",
        _ => active_tab(route).map(|t| t.title()).unwrap_or("Dashboard"),
    }
}

/// Sidebar and top bar around every gated page.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let nav = use_nav();
    let mut session = use_session();
    let features = use_features();
    use_notification_provider();

    let current = active_tab(&route);
    let title = page_title(&route);
    let user = session.current_user();
    let (name, role, photo) = user
        .map(|u| (u.name, u.role.display_name(), u.photo))
        .unwrap_or_else(|| ("Guest".to_string(), "", None));

    let sign_out = move |_| {
        let api = session.api();
        spawn(async move {
            if let Err(e) = api.sign_out().await {
                tracing::warn!(error = %e, "Sign-out request failed");
            }
        });
        session.logout();
        navigator().push(Route::SignIn {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    Link { to: Route::Home {}, class: "sidebar-brand", "Garment Dashboard" }
                }
                SidebarContent {
                    SidebarMenu {
                        for entry in nav.menu.iter() {
                            NavEntryView { key: "{entry.label()}", entry: *entry, current }
                        }
                    }
                }
                SidebarFooter {
                    button { class: "sidebar-sign-out", r#type: "button", onclick: sign_out,
                        "Sign Out"
                    }
                }
            }

            SidebarInset {
                header { class: "navbar-bar",
                    SidebarTrigger {
                        span { class: "navbar-trigger-icon", "\u{2630}" }
                    }
                    span { class: "navbar-title", "{title}" }
                    div { class: "navbar-spacer" }
                    if features.notifications {
                        NotificationBadge {}
                    }
                    Link { to: tab_route(Tab::Profile), class: "navbar-user",
                        div { class: "navbar-user-text",
                            span { class: "navbar-user-name", "{name}" }
                            span { class: "navbar-user-role", "{role}" }
                        }
                        UserAvatar { name: name.clone(), photo }
                    }
                }
                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Production => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        NavIcon::Transactions => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Inventory => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        NavIcon::Reports => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Maintenance => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        NavIcon::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::Orders => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        NavIcon::Bell => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
        NavIcon::Profile => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        NavIcon::SignIn => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
    }
}

/// Generic renderer for one menu table entry.
#[component]
fn NavEntryView(entry: NavEntry, current: Option<Tab>) -> Element {
    match entry {
        NavEntry::Link { label, icon, target } => rsx! {
            SidebarMenuItem {
                NavTargetLink { target,
                    SidebarMenuButton { active: entry.is_active(current),
                        {nav_icon(icon)}
                        span { class: "sidebar-menu-label", "{label}" }
                    }
                }
            }
        },
        NavEntry::Group { label, icon, children } => rsx! {
            SidebarMenuGroup {
                label: label.to_string(),
                icon: nav_icon(icon),
                active: entry.is_active(current),
                for child in children.iter() {
                    SidebarMenuSubItem { key: "{child.label()}",
                        if let NavEntry::Link { label, target, .. } = child {
                            NavTargetLink { target: *target,
                                SidebarMenuSubButton { active: child.is_active(current), "{label}" }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
pub fn NavTargetLink(target: NavTarget, children: Element) -> Element {
    match target {
        NavTarget::Tab(tab) => rsx! {
            Link { to: tab_route(tab), class: "nav-link", {children} }
        },
        NavTarget::Path(path) => rsx! {
            Link { to: path, class: "nav-link", {children} }
        },
    }
}
