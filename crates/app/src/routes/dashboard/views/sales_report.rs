use dioxus::prelude::*;
use shared_types::{format_amount, SalesReport, SalesRow};
use shared_ui::{
    Card, CardContent, DataTable, DataTableCell, DataTableEmpty, DataTableRow, DataTableTotal,
    PageHeader, SkeletonTable, StatCard,
};

use super::{columns, LoadError};
use crate::format_helpers::format_percent;
use crate::session::use_session;

const COLUMNS: [&str; 4] = ["Product", "Units sold", "Amount", "Share"];

/// Share of the grand total, 0 when nothing was sold.
fn share(row: &SalesRow, grand_total: f64) -> f64 {
    if grand_total > 0.0 {
        row.amount / grand_total
    } else {
        0.0
    }
}

#[component]
pub fn SalesReportView() -> Element {
    let session = use_session();

    let data = use_resource(move || {
        let api = session.api();
        async move { api.sales_report().await }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Sales Report", description: "Revenue by product type" }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(report)) => rsx! { SalesTable { report: report.clone() } },
            }
        }
    }
}

#[component]
fn SalesTable(report: SalesReport) -> Element {
    let grand_total = report.grand_total();

    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Grand total", value: format_amount(grand_total) }
            StatCard { label: "Units sold", value: report.units_sold().to_string() }
        }
        Card {
            CardContent {
                DataTable { columns: columns(&COLUMNS),
                    if report.rows.is_empty() {
                        DataTableEmpty { colspan: COLUMNS.len(), message: "No sales recorded." }
                    }
                    for row in report.rows.iter() {
                        DataTableRow { key: "{row.product_type}",
                            DataTableCell { "{row.product_type}" }
                            DataTableCell { "{row.quantity}" }
                            DataTableCell { {format_amount(row.amount)} }
                            DataTableCell { {format_percent(share(row, grand_total))} }
                        }
                    }
                    DataTableTotal { label: "Total", label_span: 1,
                        td { "{report.units_sold()}" }
                        td { {format_amount(grand_total)} }
                        td {}
                    }
                }
            }
        }
    }
}
