use dioxus::prelude::*;
use shared_types::{format_amount, Order, Status, StatusUpdate, STATUS_CHOICES};
use shared_ui::{
    use_toast, DataTable, DataTableCell, DataTableEmpty, DataTableRow, PageHeader, SelectField,
    SkeletonTable, ToastOptions,
};

use super::{columns, LoadError};
use crate::components::status_select::StatusSelect;
use crate::format_helpers::format_optional_date;
use crate::routes::Route;
use crate::session::use_session;
use crate::use_features;

/// Filter value that matches every status.
const ALL_STATUSES: &str = "all";

const COLUMNS: [&str; 7] = ["Customer", "Items", "Qty", "Amount", "Appointment", "Status", ""];

/// Orders matching the status filter. `None` keeps everything.
fn filter_orders(orders: &[Order], status: Option<Status>) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| status.map_or(true, |s| o.status == s))
        .cloned()
        .collect()
}

/// Every order in the shop, with inline status updates.
#[component]
pub fn OrdersAdminView() -> Element {
    let session = use_session();
    let features = use_features();
    let toast = use_toast();
    let mut filter = use_signal(|| Option::<Status>::None);

    let mut data = use_resource(move || {
        let api = session.api();
        async move { api.list::<Order>().await }
    });

    let change_status = move |(id, status): (String, Status)| {
        let api = session.api();
        spawn(async move {
            match api.update::<Order, _>(&id, &StatusUpdate { status }).await {
                Ok(_) => {
                    toast.success(format!("Order marked {}.", status.as_str()), ToastOptions::new());
                    data.restart();
                }
                Err(e) => {
                    tracing::warn!(order_id = %id, error = %e, "Order status update failed");
                    toast.error(e.message, ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Orders",
                description: "All student orders",
                actions: rsx! {
                    SelectField {
                        name: "status_filter",
                        label: "Status",
                        value: filter().map(|s| s.as_str()).unwrap_or(ALL_STATUSES).to_string(),
                        onchange: move |evt: FormEvent| filter.set(Status::parse(&evt.value())),
                        option { value: ALL_STATUSES, "All" }
                        for s in STATUS_CHOICES.iter() {
                            option { key: "{s.as_str()}", value: s.as_str(), "{s.as_str()}" }
                        }
                    }
                },
            }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(orders)) => {
                    let shown = filter_orders(orders, filter());
                    rsx! {
                        DataTable { columns: columns(&COLUMNS),
                            if shown.is_empty() {
                                DataTableEmpty { colspan: COLUMNS.len(), message: "No orders match." }
                            }
                            for order in shown.iter() {
                                DataTableRow { key: "{order.id}",
                                    DataTableCell { {order.user_name.clone().unwrap_or_else(|| order.user_id.clone())} }
                                    DataTableCell { "{order.items.len()}" }
                                    DataTableCell { "{order.total_quantity()}" }
                                    DataTableCell { {format_amount(order.total_amount())} }
                                    DataTableCell { {format_optional_date(order.appointment_date.as_ref())} }
                                    DataTableCell {
                                        StatusSelect {
                                            status: order.status,
                                            on_change: {
                                                let id = order.id.clone();
                                                move |status| change_status((id.clone(), status))
                                            },
                                        }
                                    }
                                    DataTableCell {
                                        if features.receipts {
                                            Link {
                                                to: Route::Receipt { order_id: order.id.clone() },
                                                "Receipt"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
