use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{format_amount, NewOrder, Order, OrderItem, ProductType};
use shared_ui::{
    use_toast, Button, ButtonVariant, DataTable, DataTableCell, DataTableEmpty, DataTableRow,
    FormError, PageHeader, SelectField, Sheet, SkeletonTable, TextField, ToastOptions,
};
use validator::Validate;

use super::{columns, viewer_id, LoadError};
use crate::components::status_select::StatusBadge;
use crate::forms::{apply_server_error, error_for, field_errors, opt_str, parse_count};
use crate::format_helpers::{format_optional_date, parse_date_input};
use crate::routes::Route;
use crate::session::use_session;
use crate::use_features;

const COLUMNS: [&str; 6] = ["Items", "Qty", "Amount", "Status", "Appointment", ""];
const SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// One-line description of an order's items.
fn items_summary(items: &[OrderItem]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(|i| match &i.size {
            Some(size) => format!("{} ({size})", i.product_type),
            None => i.product_type.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the request for a single-item order, priced from the lookup list.
fn build_order(
    user_id: String,
    product: Option<&ProductType>,
    size: &str,
    quantity: u32,
    appointment: &str,
) -> NewOrder {
    let items = product
        .map(|p| OrderItem {
            product_type: p.name.clone(),
            size: opt_str(size),
            quantity,
            unit_price: p.price,
        })
        .into_iter()
        .collect();
    NewOrder {
        user_id,
        items,
        appointment_date: parse_date_input(appointment),
        receipt: None,
    }
}

/// Student orders and fitting appointments.
#[component]
pub fn OrdersView() -> Element {
    let session = use_session();
    let features = use_features();
    let mut sheet_open = use_signal(|| false);

    let mut data = use_resource(move || {
        let user_id = viewer_id(&session);
        let api = session.api();
        async move { api.orders_for_user(&user_id).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Orders & Appointments",
                description: "Your uniform orders and fitting schedule",
                actions: rsx! {
                    Button { onclick: move |_| sheet_open.set(true), "New order" }
                },
            }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(orders)) => rsx! {
                    DataTable { columns: columns(&COLUMNS),
                        if orders.is_empty() {
                            DataTableEmpty { colspan: COLUMNS.len(), message: "You have no orders yet." }
                        }
                        for order in orders.iter() {
                            DataTableRow { key: "{order.id}",
                                DataTableCell { {items_summary(&order.items)} }
                                DataTableCell { "{order.total_quantity()}" }
                                DataTableCell { {format_amount(order.total_amount())} }
                                DataTableCell { StatusBadge { status: order.status } }
                                DataTableCell { {format_optional_date(order.appointment_date.as_ref())} }
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
                },
            }

            OrderForm {
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
fn OrderForm(open: bool, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut product = use_signal(String::new);
    let mut size = use_signal(|| "M".to_string());
    let mut quantity = use_signal(|| "1".to_string());
    let mut appointment = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let product_types = use_resource(move || {
        let api = session.api();
        async move { api.list::<ProductType>().await }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = {
            let types = product_types.read();
            let selected = match &*types {
                Some(Ok(list)) => list.iter().find(|t| t.id == product()),
                _ => None,
            };
            build_order(
                viewer_id(&session),
                selected,
                &size(),
                parse_count(&quantity()),
                &appointment(),
            )
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
            match api.create::<Order, _>(&body).await {
                Ok(order) => {
                    tracing::info!(order_id = %order.id, "Order placed");
                    product.set(String::new());
                    quantity.set("1".to_string());
                    appointment.set(String::new());
                    toast.success("Order submitted.".to_string(), ToastOptions::new());
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
        Sheet {
            open,
            on_close,
            title: "New order",
            description: "Pick a product and a fitting date.",
            FormError { message: banner() }
            form { class: "sheet-form", onsubmit: handle_submit,
                SelectField {
                    name: "product",
                    label: "Product",
                    value: product(),
                    error: error_for(&errors.read(), "items"),
                    onchange: move |evt: FormEvent| product.set(evt.value()),
                    option { value: "", "Select a product" }
                    if let Some(Ok(types)) = &*product_types.read() {
                        for t in types.iter() {
                            option { key: "{t.id}", value: "{t.id}",
                                {format!("{} - {}", t.name, format_amount(t.price))}
                            }
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
                    name: "appointment_date",
                    label: "Fitting appointment",
                    input_type: "date",
                    value: appointment(),
                    on_input: move |evt: FormEvent| appointment.set(evt.value()),
                }
                div { class: "row-actions",
                    Button { variant: ButtonVariant::Outline, onclick: move |_| on_close.call(()), "Cancel" }
                    Button { button_type: "submit", loading: saving(), "Submit order" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shirt() -> ProductType {
        ProductType {
            id: "pt-1".into(),
            name: "PE Shirt".into(),
            price: 350.0,
        }
    }

    #[test]
    fn order_is_priced_from_product_type() {
        let order = build_order("u1".into(), Some(&shirt()), "L", 2, "2026-06-01");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].unit_price, 350.0);
        assert_eq!(order.items[0].size.as_deref(), Some("L"));
        assert!(order.appointment_date.is_some());
        assert!(order.validate().is_ok());
    }

    #[test]
    fn missing_product_fails_validation() {
        let order = build_order("u1".into(), None, "M", 1, "");
        assert!(order.items.is_empty());
        assert!(order.appointment_date.is_none());
        let errors = field_errors(&order.validate().unwrap_err());
        assert_eq!(errors.get("items").map(String::as_str), Some("Add at least one item"));
    }

    #[test]
    fn items_summary_lists_sizes() {
        let items = vec![
            OrderItem {
                product_type: "PE Shirt".into(),
                size: Some("M".into()),
                quantity: 1,
                unit_price: 1.0,
            },
            OrderItem {
                product_type: "Necktie".into(),
                size: None,
                quantity: 1,
                unit_price: 1.0,
            },
        ];
        assert_eq!(items_summary(&items), "PE Shirt (M), Necktie");
        assert_eq!(items_summary(&[]), "-");
    }
}
