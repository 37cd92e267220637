use dioxus::prelude::*;
use shared_types::{Rental, Status, StatusUpdate};
use shared_ui::{
    use_toast, CountBadge, DataTable, DataTableCell, DataTableEmpty, DataTableRow, PageHeader,
    SkeletonTable, ToastOptions,
};

use super::{columns, LoadError};
use crate::components::status_select::StatusSelect;
use crate::format_helpers::format_optional_date;
use crate::session::use_session;

const COLUMNS: [&str; 6] = ["Requested by", "Item", "Qty", "From", "Until", "Status"];

#[component]
pub fn RentalsAdminView() -> Element {
    let session = use_session();
    let toast = use_toast();

    let mut data = use_resource(move || {
        let api = session.api();
        async move { api.list::<Rental>().await }
    });

    let change_status = move |(id, status): (String, Status)| {
        let api = session.api();
        spawn(async move {
            match api.update::<Rental, _>(&id, &StatusUpdate { status }).await {
                Ok(_) => data.restart(),
                Err(e) => {
                    tracing::warn!(rental_id = %id, error = %e, "Rental status update failed");
                    toast.error(e.message, ToastOptions::new());
                }
            }
        });
    };

    let pending = match &*data.read() {
        Some(Ok(rentals)) => rentals.iter().filter(|r| r.status == Status::Pending).count(),
        _ => 0,
    };

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Rentals",
                description: "Rental requests from coordinators",
                actions: rsx! {
                    span { class: "muted", "Pending " }
                    CountBadge { count: pending }
                },
            }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(rentals)) => rsx! {
                    DataTable { columns: columns(&COLUMNS),
                        if rentals.is_empty() {
                            DataTableEmpty { colspan: COLUMNS.len(), message: "No rental requests." }
                        }
                        for r in rentals.iter() {
                            DataTableRow { key: "{r.id}",
                                DataTableCell { {r.user_name.clone().unwrap_or_else(|| r.user_id.clone())} }
                                DataTableCell { "{r.item}" }
                                DataTableCell { "{r.quantity}" }
                                DataTableCell { {format_optional_date(r.start_date.as_ref())} }
                                DataTableCell { {format_optional_date(r.end_date.as_ref())} }
                                DataTableCell {
                                    StatusSelect {
                                        status: r.status,
                                        on_change: {
                                            let id = r.id.clone();
                                            move |status| change_status((id.clone(), status))
                                        },
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
