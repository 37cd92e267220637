use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, CommercialJob, NewCommercialJob};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableCell,
    DataTableEmpty, DataTableRow, FormError, PageHeader, SkeletonTable, TextAreaField, TextField,
    ToastOptions,
};
use validator::Validate;

use super::{columns, viewer_id, LoadError};
use crate::components::status_select::StatusBadge;
use crate::forms::{apply_server_error, error_for, field_errors, parse_count};
use crate::format_helpers::format_optional_date;
use crate::session::use_session;

const COLUMNS: [&str; 4] = ["Description", "Qty", "Submitted", "Status"];

/// Job requests from commercial and job-order accounts. The form sits
/// inline above the list.
#[component]
pub fn CommercialJobView() -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut description = use_signal(String::new);
    let mut quantity = use_signal(|| "1".to_string());
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut data = use_resource(move || {
        let user_id = viewer_id(&session);
        let api = session.api();
        async move {
            let jobs = api.list::<CommercialJob>().await?;
            Ok::<_, AppError>(
                jobs.into_iter()
                    .filter(|j| j.user_id == user_id)
                    .collect::<Vec<_>>(),
            )
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = NewCommercialJob {
            user_id: viewer_id(&session),
            description: description().trim().to_string(),
            quantity: parse_count(&quantity()),
        };
        if let Err(e) = body.validate() {
            errors.set(field_errors(&e));
            return;
        }
        errors.set(HashMap::new());
        banner.set(None);
        saving.set(true);

        let api = session.api();
        spawn(async move {
            match api.create::<CommercialJob, _>(&body).await {
                Ok(job) => {
                    tracing::info!(job_id = %job.id, "Commercial job submitted");
                    description.set(String::new());
                    quantity.set("1".to_string());
                    toast.success("Job submitted.".to_string(), ToastOptions::new());
                    data.restart();
                }
                Err(e) => {
                    let (fields, message) = apply_server_error(&e);
                    errors.set(fields);
                    banner.set(Some(message));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "container",
            PageHeader { title: "Commercial Jobs", description: "Submit and track garment jobs" }

            Card {
                CardHeader { CardTitle { "New job" } }
                CardContent {
                    FormError { message: banner() }
                    form { class: "inline-form", onsubmit: handle_submit,
                        TextAreaField {
                            name: "description",
                            label: "Description",
                            value: description(),
                            placeholder: "Garment, fabric, sizes and any special instructions",
                            error: error_for(&errors.read(), "description"),
                            on_input: move |evt: FormEvent| description.set(evt.value()),
                        }
                        TextField {
                            name: "quantity",
                            label: "Quantity",
                            input_type: "number",
                            value: quantity(),
                            error: error_for(&errors.read(), "quantity"),
                            on_input: move |evt: FormEvent| quantity.set(evt.value()),
                        }
                        Button { button_type: "submit", loading: saving(), "Submit job" }
                    }
                }
            }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(jobs)) => rsx! {
                    DataTable { columns: columns(&COLUMNS),
                        if jobs.is_empty() {
                            DataTableEmpty { colspan: COLUMNS.len(), message: "No jobs submitted yet." }
                        }
                        for job in jobs.iter() {
                            DataTableRow { key: "{job.id}",
                                DataTableCell { "{job.description}" }
                                DataTableCell { "{job.quantity}" }
                                DataTableCell { {format_optional_date(job.created_at.as_ref())} }
                                DataTableCell { StatusBadge { status: job.status } }
                            }
                        }
                    }
                },
            }
        }
    }
}
