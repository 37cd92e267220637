use dioxus::prelude::*;
use shared_types::{
    format_amount, AppError, DashboardCounts, Order, Production, RawMaterial, Rental,
};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableCell, DataTableEmpty,
    DataTableRow, PageHeader, SkeletonTable, StatCard,
};

use super::{columns, LoadError};
use crate::components::status_select::StatusBadge;
use crate::format_helpers::format_optional_date;
use crate::session::use_session;

const RECENT_ORDERS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
struct AdminSummary {
    counts: DashboardCounts,
    recent: Vec<Order>,
}

/// Newest orders first; undated orders sort last.
fn recent_orders(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

#[component]
pub fn HomeAdminView() -> Element {
    let session = use_session();

    let data = use_resource(move || {
        let api = session.api();
        async move {
            let orders = api.list::<Order>().await?;
            let rentals = api.list::<Rental>().await?;
            let productions = api.list::<Production>().await?;
            let materials = api.list::<RawMaterial>().await?;
            Ok::<_, AppError>(AdminSummary {
                counts: DashboardCounts::compute(&orders, &rentals, &productions, &materials),
                recent: recent_orders(&orders, RECENT_ORDERS),
            })
        }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Dashboard", description: "Shop activity at a glance" }

            match &*data.read() {
                None => rsx! { SkeletonTable { rows: 4 } },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(summary)) => rsx! {
                    div { class: "stat-grid",
                        StatCard {
                            label: "Orders",
                            value: summary.counts.orders.to_string(),
                            hint: Some(format!("{} pending", summary.counts.pending_orders)),
                        }
                        StatCard { label: "Rentals", value: summary.counts.rentals.to_string() }
                        StatCard { label: "Productions", value: summary.counts.productions.to_string() }
                        StatCard {
                            label: "Low-stock materials",
                            value: summary.counts.low_stock_materials.to_string(),
                            alert: summary.counts.low_stock_materials > 0,
                        }
                    }
                    Card {
                        CardHeader { CardTitle { "Recent orders" } }
                        CardContent {
                            DataTable { columns: columns(&["Customer", "Items", "Amount", "Status", "Placed"]),
                                if summary.recent.is_empty() {
                                    DataTableEmpty { colspan: 5, message: "No orders yet." }
                                }
                                for o in summary.recent.iter() {
                                    DataTableRow { key: "{o.id}",
                                        DataTableCell { {o.user_name.clone().unwrap_or_else(|| o.user_id.clone())} }
                                        DataTableCell { "{o.total_quantity()}" }
                                        DataTableCell { {format_amount(o.total_amount())} }
                                        DataTableCell { StatusBadge { status: o.status } }
                                        DataTableCell { {format_optional_date(o.created_at.as_ref())} }
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
