use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{QuantityUpdate, RawMaterial, RawMaterialInput, RawMaterialType};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, DataTable, DataTableCell,
    DataTableEmpty, DataTableRow, FormError, PageHeader, SelectField, Sheet, SkeletonTable,
    TextField, ToastOptions,
};
use validator::Validate;

use super::{columns, LoadError};
use crate::forms::{apply_server_error, error_for, field_errors, parse_amount};
use crate::format_helpers::format_quantity;
use crate::session::use_session;

const COLUMNS: [&str; 6] = ["Material", "Type", "On hand", "Reorder at", "Adjust", ""];

/// Low-stock rows first, then by name.
fn sort_for_display(mut materials: Vec<RawMaterial>) -> Vec<RawMaterial> {
    materials.sort_by(|a, b| {
        b.is_low_stock()
            .cmp(&a.is_low_stock())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    materials
}

#[component]
pub fn RawMaterialsView() -> Element {
    let session = use_session();
    let mut sheet_open = use_signal(|| false);

    let mut data = use_resource(move || {
        let api = session.api();
        async move { api.list::<RawMaterial>().await.map(sort_for_display) }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Raw Materials",
                description: "Fabric, thread and trims on hand",
                actions: rsx! {
                    Button { onclick: move |_| sheet_open.set(true), "Add material" }
                },
            }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(materials)) => rsx! {
                    DataTable { columns: columns(&COLUMNS),
                        if materials.is_empty() {
                            DataTableEmpty { colspan: COLUMNS.len(), message: "No raw materials recorded." }
                        }
                        for m in materials.iter() {
                            MaterialRow {
                                key: "{m.id}",
                                material: m.clone(),
                                on_changed: move |_| data.restart(),
                            }
                        }
                    }
                },
            }

            MaterialForm {
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
fn MaterialRow(material: RawMaterial, on_changed: EventHandler<()>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut adjusted = use_signal(|| format_quantity(material.quantity));
    let mut busy = use_signal(|| false);

    // Reset the input when a refetch brings a new quantity.
    let current = material.quantity;
    use_effect(use_reactive!(|current| {
        let mut adjusted = adjusted;
        adjusted.set(format_quantity(current));
    }));

    let id = material.id.clone();
    let save = move |_| {
        let id = id.clone();
        let quantity = parse_amount(&adjusted());
        busy.set(true);
        let api = session.api();
        spawn(async move {
            match api.update::<RawMaterial, _>(&id, &QuantityUpdate { quantity }).await {
                Ok(_) => on_changed.call(()),
                Err(e) => {
                    tracing::warn!(material_id = %id, error = %e, "Quantity update failed");
                    toast.error(e.message, ToastOptions::new());
                }
            }
            busy.set(false);
        });
    };

    let id = material.id.clone();
    let remove = move |_| {
        let id = id.clone();
        let api = session.api();
        spawn(async move {
            match api.delete::<RawMaterial>(&id).await {
                Ok(()) => on_changed.call(()),
                Err(e) => toast.error(e.message, ToastOptions::new()),
            }
        });
    };

    rsx! {
        DataTableRow {
            DataTableCell {
                "{material.name} "
                if material.is_low_stock() {
                    Badge { variant: BadgeVariant::Destructive, "Low stock" }
                }
            }
            DataTableCell { "{material.material_type}" }
            DataTableCell { "{format_quantity(material.quantity)} {material.unit}" }
            DataTableCell { "{format_quantity(material.reorder_level)}" }
            DataTableCell {
                div { class: "row-actions",
                    input {
                        class: "inline-input",
                        r#type: "number",
                        step: "any",
                        min: "0",
                        value: adjusted(),
                        oninput: move |evt| adjusted.set(evt.value()),
                    }
                    Button { size: ButtonSize::Small, loading: busy(), onclick: save, "Save" }
                }
            }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    onclick: remove,
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn MaterialForm(open: bool, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut material_type = use_signal(String::new);
    let mut quantity = use_signal(String::new);
    let mut reorder_level = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let types = use_resource(move || {
        let api = session.api();
        async move { api.list::<RawMaterialType>().await }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let unit = match &*types.read() {
            Some(Ok(list)) => list
                .iter()
                .find(|t| t.name == material_type())
                .map(|t| t.unit.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };
        let body = RawMaterialInput {
            name: name().trim().to_string(),
            material_type: material_type(),
            quantity: parse_amount(&quantity()),
            unit,
            reorder_level: parse_amount(&reorder_level()),
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
            match api.create::<RawMaterial, _>(&body).await {
                Ok(_) => {
                    name.set(String::new());
                    quantity.set(String::new());
                    reorder_level.set(String::new());
                    toast.success("Material added.".to_string(), ToastOptions::new());
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
        Sheet { open, on_close, title: "Add raw material",
            FormError { message: banner() }
            form { class: "sheet-form", onsubmit: handle_submit,
                TextField {
                    name: "name",
                    label: "Name",
                    value: name(),
                    error: error_for(&errors.read(), "name"),
                    on_input: move |evt: FormEvent| name.set(evt.value()),
                }
                SelectField {
                    name: "material_type",
                    label: "Type",
                    value: material_type(),
                    error: error_for(&errors.read(), "material_type"),
                    onchange: move |evt: FormEvent| material_type.set(evt.value()),
                    option { value: "", "Select a type" }
                    if let Some(Ok(list)) = &*types.read() {
                        for t in list.iter() {
                            option { key: "{t.id}", value: "{t.name}", "{t.name} ({t.unit})" }
                        }
                    }
                }
                TextField {
                    name: "quantity",
                    label: "Quantity on hand",
                    input_type: "number",
                    value: quantity(),
                    error: error_for(&errors.read(), "quantity"),
                    on_input: move |evt: FormEvent| quantity.set(evt.value()),
                }
                TextField {
                    name: "reorder_level",
                    label: "Reorder level",
                    input_type: "number",
                    value: reorder_level(),
                    error: error_for(&errors.read(), "reorder_level"),
                    on_input: move |evt: FormEvent| reorder_level.set(evt.value()),
                }
                Button { button_type: "submit", loading: saving(), "Save" }
            }
        }
    }
}
