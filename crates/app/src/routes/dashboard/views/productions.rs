use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{NewProduction, ProductType, Production, Status, StatusUpdate};
use shared_ui::{
    use_toast, Button, DataTable, DataTableCell, DataTableEmpty, DataTableRow, FormError,
    PageHeader, SelectField, Sheet, SkeletonTable, TextAreaField, TextField, ToastOptions,
};
use validator::Validate;

use super::{columns, LoadError};
use crate::components::status_select::StatusSelect;
use crate::forms::{apply_server_error, error_for, field_errors, opt_str, parse_count};
use crate::format_helpers::format_optional_date;
use crate::session::use_session;

const COLUMNS: [&str; 5] = ["Product", "Quantity", "Status", "Started", "Notes"];

/// Production runs. The create form is mirrored to the `formState` draft on
/// every edit and cleared once the run is saved.
#[component]
pub fn ProductionsView() -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut sheet_open = use_signal(|| false);

    let mut data = use_resource(move || {
        let api = session.api();
        async move { api.list::<Production>().await }
    });

    let change_status = move |(id, status): (String, Status)| {
        let api = session.api();
        spawn(async move {
            match api.update::<Production, _>(&id, &StatusUpdate { status }).await {
                Ok(_) => data.restart(),
                Err(e) => {
                    tracing::warn!(production_id = %id, error = %e, "Status update failed");
                    toast.error(e.message, ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Productions",
                description: "Production runs and their progress",
                actions: rsx! {
                    Button { onclick: move |_| sheet_open.set(true), "New production" }
                },
            }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(runs)) => rsx! {
                    DataTable { columns: columns(&COLUMNS),
                        if runs.is_empty() {
                            DataTableEmpty { colspan: COLUMNS.len(), message: "No production runs yet." }
                        }
                        for run in runs.iter() {
                            DataTableRow { key: "{run.id}",
                                DataTableCell { "{run.product_type}" }
                                DataTableCell { "{run.quantity}" }
                                DataTableCell {
                                    StatusSelect {
                                        status: run.status,
                                        on_change: {
                                            let id = run.id.clone();
                                            move |status| change_status((id.clone(), status))
                                        },
                                    }
                                }
                                DataTableCell { {format_optional_date(run.start_date.as_ref())} }
                                DataTableCell { {run.notes.clone().unwrap_or_default()} }
                            }
                        }
                    }
                },
            }

            ProductionForm {
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
fn ProductionForm(open: bool, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let persistence = session.persistence();
    let mut draft = use_signal(move || persistence.load_form_draft());
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let product_types = use_resource(move || {
        let api = session.api();
        async move { api.list::<ProductType>().await }
    });

    // Blank drafts remove the key, so clearing the form clears storage too.
    use_effect(move || {
        let current = draft();
        session.persistence().save_form_draft(&current);
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = draft();
        if let Err(e) = body.validate() {
            errors.set(field_errors(&e));
            return;
        }
        errors.set(HashMap::new());
        banner.set(None);
        saving.set(true);

        let api = session.api();
        spawn(async move {
            match api.create::<Production, _>(&body).await {
                Ok(run) => {
                    tracing::info!(production_id = %run.id, "Production created");
                    session.persistence().clear_form_draft();
                    draft.set(NewProduction::default());
                    toast.success("Production run added.".to_string(), ToastOptions::new());
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

    let current = draft();
    let type_options: Vec<String> = match &*product_types.read() {
        Some(Ok(types)) => types.iter().map(|t| t.name.clone()).collect(),
        _ => Vec::new(),
    };

    rsx! {
        Sheet {
            open,
            on_close,
            title: "New production",
            description: "Unsaved input is kept as a draft until the run is created.",
            FormError { message: banner() }
            form { class: "sheet-form", onsubmit: handle_submit,
                SelectField {
                    name: "product_type",
                    label: "Product type",
                    value: current.product_type.clone(),
                    error: error_for(&errors.read(), "product_type"),
                    onchange: move |evt: FormEvent| draft.write().product_type = evt.value(),
                    option { value: "", "Select a product" }
                    for name in type_options.iter() {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
                TextField {
                    name: "quantity",
                    label: "Quantity",
                    input_type: "number",
                    value: current.quantity.to_string(),
                    error: error_for(&errors.read(), "quantity"),
                    on_input: move |evt: FormEvent| draft.write().quantity = parse_count(&evt.value()),
                }
                TextAreaField {
                    name: "notes",
                    label: "Notes",
                    value: current.notes.clone().unwrap_or_default(),
                    on_input: move |evt: FormEvent| draft.write().notes = opt_str(&evt.value()),
                }
                Button { button_type: "submit", loading: saving(), "Save" }
            }
        }
    }
}
