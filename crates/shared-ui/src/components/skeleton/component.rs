use dioxus::prelude::*;

/// Pulsing placeholder shown while a request is in flight.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Stack of row-height skeletons standing in for a table.
#[component]
pub fn SkeletonTable(#[props(default = 5)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-table", "aria-busy": "true",
            for i in 0..rows {
                Skeleton { key: "{i}", class: "skeleton-row" }
            }
        }
    }
}
