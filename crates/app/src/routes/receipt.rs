use dioxus::prelude::*;
use shared_types::{format_amount, Receipt as OrderReceipt};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableCell,
    DataTableEmpty, DataTableRow, DataTableTotal, PageHeader, SkeletonTable,
};

use crate::format_helpers::format_optional_date;
use crate::routes::not_found::NotFoundView;
use crate::session::use_session;
use crate::use_features;

const COLUMNS: [&str; 5] = ["Product", "Size", "Qty", "Unit Price", "Subtotal"];

/// Printable receipt for one order.
#[component]
pub fn Receipt(order_id: String) -> Element {
    let features = use_features();
    if !features.receipts {
        return rsx! {
            NotFoundView { path: format!("/orders/receipts/{order_id}") }
        };
    }

    rsx! {
        ReceiptView { order_id }
    }
}

#[component]
fn ReceiptView(order_id: String) -> Element {
    let session = use_session();
    let id = use_signal(|| order_id.clone());
    use_effect(use_reactive!(|order_id| {
        let mut id = id;
        id.set(order_id);
    }));

    let data = use_resource(move || {
        let order_id = id();
        let api = session.api();
        async move { api.order_receipt(&order_id).await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                title: "Receipt",
                description: format!("Order {order_id}"),
                actions: rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            let _ = document::eval("window.print()");
                        },
                        "Print"
                    }
                },
            }

            match &*data.read() {
                None => rsx! { SkeletonTable { rows: 4 } },
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent { p { class: "muted", "{e.message}" } }
                    }
                },
                Some(Ok(receipt)) => rsx! { ReceiptBody { receipt: receipt.clone() } },
            }
        }
    }
}

#[component]
fn ReceiptBody(receipt: OrderReceipt) -> Element {
    let columns: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    let total = format_amount(receipt.total());
    let issued = format_optional_date(receipt.issued_at.as_ref());

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Receipt #{receipt.receipt_number}" }
                p { class: "muted", "Issued to {receipt.customer_name} on {issued}" }
            }
            CardContent {
                DataTable { columns,
                    if receipt.items.is_empty() {
                        DataTableEmpty { colspan: COLUMNS.len(), message: "No items on this receipt." }
                    }
                    for (i, item) in receipt.items.iter().enumerate() {
                        DataTableRow { key: "{i}",
                            DataTableCell { "{item.product_type}" }
                            DataTableCell { {item.size.clone().unwrap_or_else(|| "-".to_string())} }
                            DataTableCell { "{item.quantity}" }
                            DataTableCell { {format_amount(item.unit_price)} }
                            DataTableCell { {format_amount(item.subtotal())} }
                        }
                    }
                    DataTableTotal { label: "Total", label_span: COLUMNS.len() - 1,
                        td { "{total}" }
                    }
                }
                if let Some(url) = &receipt.url {
                    a { href: "{url}", target: "_blank", rel: "noopener", "Open uploaded receipt" }
                }
            }
        }
    }
}
