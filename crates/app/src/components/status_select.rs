use dioxus::prelude::*;
use shared_types::{Status, STATUS_CHOICES};
use shared_ui::{Badge, BadgeVariant};

pub fn status_variant(status: Status) -> BadgeVariant {
    match status {
        Status::Pending => BadgeVariant::Warning,
        Status::Approved | Status::InProgress => BadgeVariant::Primary,
        Status::Completed => BadgeVariant::Success,
        Status::Cancelled | Status::Rejected => BadgeVariant::Destructive,
        Status::Unknown => BadgeVariant::Outline,
    }
}

#[component]
pub fn StatusBadge(status: Status) -> Element {
    rsx! {
        Badge { variant: status_variant(status), "{status.as_str()}" }
    }
}

/// Inline status picker for admin tables. Final statuses are shown as a
/// badge and cannot be changed.
#[component]
pub fn StatusSelect(status: Status, on_change: EventHandler<Status>) -> Element {
    if status.is_final() {
        return rsx! { StatusBadge { status } };
    }

    rsx! {
        select {
            class: "inline-input status-select",
            value: status.as_str(),
            onchange: move |evt: FormEvent| {
                if let Some(next) = Status::parse(&evt.value()) {
                    if next != status {
                        on_change.call(next);
                    }
                }
            },
            for choice in STATUS_CHOICES.iter() {
                option {
                    key: "{choice.as_str()}",
                    value: choice.as_str(),
                    selected: *choice == status,
                    "{choice.as_str()}"
                }
            }
        }
    }
}
