use chrono::Utc;
use dioxus::prelude::*;
use shared_types::{upcoming, AppError, Order, Schedule, Status};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, PageHeader, SkeletonTable, StatCard,
};

use super::{viewer_id, LoadError};
use crate::format_helpers::format_datetime;
use crate::session::use_session;

/// How many upcoming schedules the home card lists.
const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
struct HomeSummary {
    orders: usize,
    open_orders: usize,
    upcoming: Vec<Schedule>,
}

impl HomeSummary {
    fn new(orders: &[Order], schedules: &[Schedule]) -> Self {
        let mut next = upcoming(schedules, Utc::now());
        next.truncate(UPCOMING_LIMIT);
        Self {
            orders: orders.len(),
            open_orders: orders.iter().filter(|o| !o.status.is_final()).count(),
            upcoming: next,
        }
    }
}

/// Landing tab for non-admin accounts.
#[component]
pub fn HomeView() -> Element {
    let session = use_session();
    let user = session.current_user();
    let greeting = user
        .as_ref()
        .map(|u| format!("Welcome back, {}", u.name))
        .unwrap_or_else(|| "Welcome".to_string());

    let data = use_resource(move || {
        let user_id = viewer_id(&session);
        let api = session.api();
        async move {
            let orders = api.orders_for_user(&user_id).await?;
            let schedules = api.schedules_for_user(&user_id).await?;
            Ok::<_, AppError>(HomeSummary::new(&orders, &schedules))
        }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Dashboard", description: greeting }

            match &*data.read() {
                None => rsx! { SkeletonTable { rows: 3 } },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(summary)) => rsx! {
                    div { class: "stat-grid",
                        StatCard { label: "My orders", value: summary.orders.to_string() }
                        StatCard {
                            label: "Open orders",
                            value: summary.open_orders.to_string(),
                            hint: Some(format!("{} pending review", Status::Pending.as_str())),
                        }
                        StatCard { label: "Upcoming schedules", value: summary.upcoming.len().to_string() }
                    }
                    Card {
                        CardHeader { CardTitle { "Next on your calendar" } }
                        CardContent {
                            if summary.upcoming.is_empty() {
                                p { class: "muted", "Nothing scheduled." }
                            }
                            ul { class: "schedule-list",
                                for s in summary.upcoming.iter() {
                                    li { key: "{s.id}",
                                        strong { "{s.title}" }
                                        span { class: "muted", " {format_datetime(&s.date)}" }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
