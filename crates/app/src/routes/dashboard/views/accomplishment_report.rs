use dioxus::prelude::*;
use shared_types::AccomplishmentReport;
use shared_ui::{
    Card, CardContent, DataTable, DataTableCell, DataTableEmpty, DataTableRow, DataTableTotal,
    PageHeader, SkeletonTable, StatCard,
};

use super::{columns, LoadError};
use crate::format_helpers::format_percent;
use crate::session::use_session;

const COLUMNS: [&str; 4] = ["Product", "Target", "Accomplished", "Completion"];

/// Production targets against finished output, per product type.
#[component]
pub fn AccomplishmentReportView() -> Element {
    let session = use_session();

    let data = use_resource(move || {
        let api = session.api();
        async move { api.accomplishment_report().await }
    });

    rsx! {
        div { class: "container",
            PageHeader { title: "Accomplishment Report", description: "Production targets and output" }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(report)) => rsx! { ReportTable { report: report.clone() } },
            }
        }
    }
}

#[component]
fn ReportTable(report: AccomplishmentReport) -> Element {
    let overall = format_percent(report.completion_rate());

    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Target", value: report.total_target().to_string() }
            StatCard { label: "Accomplished", value: report.total_accomplished().to_string() }
            StatCard { label: "Completion", value: overall.clone() }
        }
        Card {
            CardContent {
                DataTable { columns: columns(&COLUMNS),
                    if report.rows.is_empty() {
                        DataTableEmpty { colspan: COLUMNS.len(), message: "No production targets recorded." }
                    }
                    for row in report.rows.iter() {
                        DataTableRow { key: "{row.product_type}",
                            DataTableCell { "{row.product_type}" }
                            DataTableCell { "{row.target}" }
                            DataTableCell { "{row.accomplished}" }
                            DataTableCell { {format_percent(row.completion_rate())} }
                        }
                    }
                    DataTableTotal { label: "Total", label_span: 1,
                        td { "{report.total_target()}" }
                        td { "{report.total_accomplished()}" }
                        td { "{overall}" }
                    }
                }
            }
        }
    }
}
