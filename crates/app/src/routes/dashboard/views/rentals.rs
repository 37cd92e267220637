use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, NewRental, Rental};
use shared_ui::{
    use_toast, Button, DataTable, DataTableCell, DataTableEmpty, DataTableRow, FormError,
    PageHeader, Sheet, SkeletonTable, TextField, ToastOptions,
};
use validator::Validate;

use super::{columns, viewer_id, LoadError};
use crate::components::status_select::StatusBadge;
use crate::forms::{apply_server_error, error_for, field_errors, parse_count};
use crate::format_helpers::{format_optional_date, parse_date_input};
use crate::session::use_session;

const COLUMNS: [&str; 5] = ["Item", "Qty", "From", "Until", "Status"];

/// Rentals belonging to `user_id`. The rentals endpoint has no per-user
/// route, so the full list is narrowed here.
fn rentals_for(rentals: Vec<Rental>, user_id: &str) -> Vec<Rental> {
    rentals.into_iter().filter(|r| r.user_id == user_id).collect()
}

/// Coordinator rental requests for costumes and uniforms.
#[component]
pub fn RentalsView() -> Element {
    let session = use_session();
    let mut sheet_open = use_signal(|| false);

    let mut data = use_resource(move || {
        let user_id = viewer_id(&session);
        let api = session.api();
        async move {
            let all = api.list::<Rental>().await?;
            Ok::<_, AppError>(rentals_for(all, &user_id))
        }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Rentals",
                description: "Your rental requests",
                actions: rsx! {
                    Button { onclick: move |_| sheet_open.set(true), "Request rental" }
                },
            }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(rentals)) => rsx! {
                    DataTable { columns: columns(&COLUMNS),
                        if rentals.is_empty() {
                            DataTableEmpty { colspan: COLUMNS.len(), message: "No rentals requested yet." }
                        }
                        for r in rentals.iter() {
                            DataTableRow { key: "{r.id}",
                                DataTableCell { "{r.item}" }
                                DataTableCell { "{r.quantity}" }
                                DataTableCell { {format_optional_date(r.start_date.as_ref())} }
                                DataTableCell { {format_optional_date(r.end_date.as_ref())} }
                                DataTableCell { StatusBadge { status: r.status } }
                            }
                        }
                    }
                },
            }

            RentalForm {
                open: sheet_open(),
                on_close: move |_| sheet_open.set(false),
                on_saved: move |_| {
                    sheet_open.set(false);
                    data.restart();
                },
            }
        }
    }
}

#[component]
fn RentalForm(open: bool, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut item = use_signal(String::new);
    let mut quantity = use_signal(|| "1".to_string());
    let mut start = use_signal(String::new);
    let mut end = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = NewRental {
            user_id: viewer_id(&session),
            item: item().trim().to_string(),
            quantity: parse_count(&quantity()),
            start_date: parse_date_input(&start()),
            end_date: parse_date_input(&end()),
        };
        if let Err(e) = body.validate() {
            errors.set(field_errors(&e));
            return;
        }
        if let (Some(from), Some(until)) = (body.start_date, body.end_date) {
            if until < from {
                errors.set(HashMap::from([(
                    "end_date".to_string(),
                    "Return date must be after the start date".to_string(),
                )]));
                return;
            }
        }
        errors.set(HashMap::new());
        banner.set(None);
        saving.set(true);

        let api = session.api();
        spawn(async move {
            match api.create::<Rental, _>(&body).await {
                Ok(_) => {
                    item.set(String::new());
                    quantity.set("1".to_string());
                    toast.success("Rental requested.".to_string(), ToastOptions::new());
                    on_saved.call(());
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
        Sheet { open, on_close, title: "Request rental",
            FormError { message: banner() }
            form { class: "sheet-form", onsubmit: handle_submit,
                TextField {
                    name: "item",
                    label: "Item",
                    value: item(),
                    placeholder: "e.g. Barong, Filipiniana",
                    error: error_for(&errors.read(), "item"),
                    on_input: move |evt: FormEvent| item.set(evt.value()),
                }
                TextField {
                    name: "quantity",
                    label: "Quantity",
                    input_type: "number",
                    value: quantity(),
                    error: error_for(&errors.read(), "quantity"),
                    on_input: move |evt: FormEvent| quantity.set(evt.value()),
                }
                TextField {
                    name: "start_date",
                    label: "From",
                    input_type: "date",
                    value: start(),
                    on_input: move |evt: FormEvent| start.set(evt.value()),
                }
                TextField {
                    name: "end_date",
                    label: "Until",
                    input_type: "date",
                    value: end(),
                    error: error_for(&errors.read(), "end_date"),
                    on_input: move |evt: FormEvent| end.set(evt.value()),
                }
                Button { button_type: "submit", loading: saving(), "Submit" }
            }
        }
    }
}
