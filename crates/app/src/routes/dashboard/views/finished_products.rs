use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{
    format_amount, FinishedProduct, FinishedProductInput, ProductType, QuantityUpdate,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, DataTable, DataTableCell,
    DataTableEmpty, DataTableRow, DataTableTotal, FormError, PageHeader, SelectField, Sheet,
    SkeletonTable, TextField, ToastOptions,
};
use validator::Validate;

use super::{columns, LoadError};
use crate::forms::{apply_server_error, error_for, field_errors, parse_amount, parse_count};
use crate::session::use_session;

const COLUMNS: [&str; 7] = ["Product", "Size", "On hand", "Price", "Value", "Adjust", ""];
const SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Finished goods at or below this count are flagged.
const LOW_STOCK_UNITS: u32 = 5;

fn inventory_value(products: &[FinishedProduct]) -> f64 {
    products.iter().map(FinishedProduct::stock_value).sum()
}

#[component]
pub fn FinishedProductsView() -> Element {
    let session = use_session();
    let mut sheet_open = use_signal(|| false);

    let mut data = use_resource(move || {
        let api = session.api();
        async move { api.list::<FinishedProduct>().await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Finished Products",
                description: "Garments ready for release",
                actions: rsx! {
                    Button { onclick: move |_| sheet_open.set(true), "Add stock" }
                },
            }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(products)) => rsx! {
                    DataTable { columns: columns(&COLUMNS),
                        if products.is_empty() {
                            DataTableEmpty { colspan: COLUMNS.len(), message: "No finished products in stock." }
                        }
                        for p in products.iter() {
                            ProductRow {
                                key: "{p.id}",
                                product: p.clone(),
                                on_changed: move |_| data.restart(),
                            }
                        }
                        DataTableTotal { label: "Inventory value", label_span: 4,
                            td { {format_amount(inventory_value(products))} }
                            td {}
                            td {}
                        }
                    }
                },
            }

            ProductForm {
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
fn ProductRow(product: FinishedProduct, on_changed: EventHandler<()>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut adjusted = use_signal(|| product.quantity.to_string());

    let current = product.quantity;
    use_effect(use_reactive!(|current| {
        let mut adjusted = adjusted;
        adjusted.set(current.to_string());
    }));

    let id = product.id.clone();
    let save = move |_| {
        let id = id.clone();
        let quantity = f64::from(parse_count(&adjusted()));
        let api = session.api();
        spawn(async move {
            match api.update::<FinishedProduct, _>(&id, &QuantityUpdate { quantity }).await {
                Ok(_) => on_changed.call(()),
                Err(e) => {
                    tracing::warn!(product_id = %id, error = %e, "Stock update failed");
                    toast.error(e.message, ToastOptions::new());
                }
            }
        });
    };

    let id = product.id.clone();
    let remove = move |_| {
        let id = id.clone();
        let api = session.api();
        spawn(async move {
            match api.delete::<FinishedProduct>(&id).await {
                Ok(()) => on_changed.call(()),
                Err(e) => toast.error(e.message, ToastOptions::new()),
            }
        });
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{product.product_type}" }
            DataTableCell { "{product.size}" }
            DataTableCell {
                "{product.quantity} "
                if product.quantity <= LOW_STOCK_UNITS {
                    Badge { variant: BadgeVariant::Warning, "Low" }
                }
            }
            DataTableCell { {format_amount(product.price)} }
            DataTableCell { {format_amount(product.stock_value())} }
            DataTableCell {
                div { class: "row-actions",
                    input {
                        class: "inline-input",
                        r#type: "number",
                        min: "0",
                        value: adjusted(),
                        oninput: move |evt| adjusted.set(evt.value()),
                    }
                    Button { size: ButtonSize::Small, onclick: save, "Save" }
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
fn ProductForm(open: bool, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut product_type = use_signal(String::new);
    let mut size = use_signal(|| "M".to_string());
    let mut quantity = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let types = use_resource(move || {
        let api = session.api();
        async move { api.list::<ProductType>().await }
    });

    // Picking a product type pre-fills its list price.
    let pick_type = move |evt: FormEvent| {
        let name = evt.value();
        if let Some(Ok(list)) = &*types.read() {
            if let Some(t) = list.iter().find(|t| t.name == name) {
                price.set(format!("{:.2}", t.price));
            }
        }
        product_type.set(name);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = FinishedProductInput {
            product_type: product_type(),
            size: size(),
            quantity: parse_count(&quantity()),
            price: parse_amount(&price()),
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
            match api.create::<FinishedProduct, _>(&body).await {
                Ok(_) => {
                    quantity.set(String::new());
                    toast.success("Stock added.".to_string(), ToastOptions::new());
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
        Sheet { open, on_close, title: "Add finished product",
            FormError { message: banner() }
            form { class: "sheet-form", onsubmit: handle_submit,
                SelectField {
                    name: "product_type",
                    label: "Product type",
                    value: product_type(),
                    error: error_for(&errors.read(), "product_type"),
                    onchange: pick_type,
                    option { value: "", "Select a product" }
                    if let Some(Ok(list)) = &*types.read() {
                        for t in list.iter() {
                            option { key: "{t.id}", value: "{t.name}", "{t.name}" }
                        }
                    }
                }
                SelectField {
                    name: "size",
                    label: "Size",
                    value: size(),
                    onchange: move |evt: FormEvent| size.set(evt.value()),
                    for s in SIZES {
                        option { key: "{s}", value: s, "{s}" }
                    }
                }
                TextField {
                    name: "quantity",
                    label: "Quantity",
                    input_type: "number",
                    value: quantity(),
                    on_input: move |evt: FormEvent| quantity.set(evt.value()),
                }
                TextField {
                    name: "price",
                    label: "Unit price",
                    input_type: "number",
                    value: price(),
                    error: error_for(&errors.read(), "price"),
                    on_input: move |evt: FormEvent| price.set(evt.value()),
                }
                Button { button_type: "submit", loading: saving(), "Save" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_value_sums_stock() {
        let products = [
            FinishedProduct {
                id: "1".into(),
                product_type: "Blouse".into(),
                size: "S".into(),
                quantity: 4,
                price: 250.0,
            },
            FinishedProduct {
                id: "2".into(),
                product_type: "Slacks".into(),
                size: "M".into(),
                quantity: 2,
                price: 400.0,
            },
        ];
        assert_eq!(inventory_value(&products), 1800.0);
        assert_eq!(inventory_value(&[]), 0.0);
    }
}
