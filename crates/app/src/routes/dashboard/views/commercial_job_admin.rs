use dioxus::prelude::*;
use shared_types::{CommercialJob, Status, StatusUpdate};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, DataTable, DataTableCell, DataTableEmpty,
    DataTableRow, PageHeader, SkeletonTable, ToastOptions,
};

use super::{columns, LoadError};
use crate::components::status_select::StatusSelect;
use crate::format_helpers::format_optional_date;
use crate::session::use_session;

const COLUMNS: [&str; 6] = ["Client", "Description", "Qty", "Received", "Status", ""];

#[component]
pub fn CommercialJobAdminView() -> Element {
    let session = use_session();
    let toast = use_toast();

    let mut data = use_resource(move || {
        let api = session.api();
        async move { api.list::<CommercialJob>().await }
    });

    let change_status = move |(id, status): (String, Status)| {
        let api = session.api();
        spawn(async move {
            match api.update::<CommercialJob, _>(&id, &StatusUpdate { status }).await {
                Ok(_) => data.restart(),
                Err(e) => {
                    tracing::warn!(job_id = %id, error = %e, "Commercial job status update failed");
                    toast.error(e.message, ToastOptions::new());
                }
            }
        });
    };

    let remove = move |id: String| {
        let api = session.api();
        spawn(async move {
            match api.delete::<CommercialJob>(&id).await {
                Ok(()) => {
                    toast.success("Job removed.".to_string(), ToastOptions::new());
                    data.restart();
                }
                Err(e) => toast.error(e.message, ToastOptions::new()),
            }
        });
    };

    rsx! {
        div { class: "container",
            PageHeader { title: "Commercial Jobs", description: "Outside garment work taken in by the shop" }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(jobs)) => rsx! {
                    DataTable { columns: columns(&COLUMNS),
                        if jobs.is_empty() {
                            DataTableEmpty { colspan: COLUMNS.len(), message: "No commercial jobs." }
                        }
                        for job in jobs.iter() {
                            DataTableRow { key: "{job.id}",
                                DataTableCell { {job.user_name.clone().unwrap_or_else(|| job.user_id.clone())} }
                                DataTableCell { "{job.description}" }
                                DataTableCell { "{job.quantity}" }
                                DataTableCell { {format_optional_date(job.created_at.as_ref())} }
                                DataTableCell {
                                    StatusSelect {
                                        status: job.status,
                                        on_change: {
                                            let id = job.id.clone();
                                            move |status| change_status((id.clone(), status))
                                        },
                                    }
                                }
                                DataTableCell {
                                    if job.status.is_final() {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            size: ButtonSize::Small,
                                            onclick: {
                                                let id = job.id.clone();
                                                move |_| remove(id.clone())
                                            },
                                            "Remove"
                                        }
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
