use chrono::Utc;
use dioxus::prelude::*;
use shared_types::Schedule;
use shared_ui::{
    Badge, BadgeVariant, DataTable, DataTableCell, DataTableEmpty, DataTableRow, PageHeader,
    SkeletonTable,
};

use super::{columns, viewer_id, LoadError};
use crate::format_helpers::format_datetime;
use crate::session::use_session;

const COLUMNS: [&str; 4] = ["When", "What", "Where", ""];

/// Soonest first, with past entries after every upcoming one.
fn order_schedules(mut schedules: Vec<Schedule>, now: chrono::DateTime<Utc>) -> Vec<Schedule> {
    schedules.sort_by(|a, b| {
        let (a_past, b_past) = (a.date < now, b.date < now);
        a_past.cmp(&b_past).then_with(|| {
            if a_past {
                b.date.cmp(&a.date)
            } else {
                a.date.cmp(&b.date)
            }
        })
    });
    schedules
}

#[component]
pub fn SchedulesView() -> Element {
    let session = use_session();

    let data = use_resource(move || {
        let user_id = viewer_id(&session);
        let api = session.api();
        async move {
            api.schedules_for_user(&user_id)
                .await
                .map(|s| order_schedules(s, Utc::now()))
        }
    });

    let now = Utc::now();

    rsx! {
        div { class: "container",
            PageHeader { title: "Schedules", description: "Fittings, pick-ups and releases" }

            match &*data.read() {
                None => rsx! { SkeletonTable {} },
                Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                Some(Ok(schedules)) => rsx! {
                    DataTable { columns: columns(&COLUMNS),
                        if schedules.is_empty() {
                            DataTableEmpty { colspan: COLUMNS.len(), message: "Nothing scheduled." }
                        }
                        for s in schedules.iter() {
                            DataTableRow { key: "{s.id}",
                                DataTableCell { {format_datetime(&s.date)} }
                                DataTableCell {
                                    strong { "{s.title}" }
                                    if !s.description.is_empty() {
                                        p { class: "muted", "{s.description}" }
                                    }
                                }
                                DataTableCell { {s.location.clone().unwrap_or_else(|| "-".to_string())} }
                                DataTableCell {
                                    if s.date < now {
                                        Badge { variant: BadgeVariant::Secondary, "Past" }
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
