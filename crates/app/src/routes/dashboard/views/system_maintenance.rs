//! Lookup lists that feed the other forms: product types (with their list
//! price) and raw material types (with their unit).

use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{format_amount, LookupInput, ProductType, RawMaterialType};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, DataTable, DataTableCell, DataTableEmpty, DataTableRow, FormError, PageHeader,
    SkeletonTable, TextField, ToastOptions,
};
use validator::Validate;

use super::{columns, LoadError};
use crate::forms::{apply_server_error, error_for, field_errors, opt_str, parse_amount};
use crate::session::use_session;

fn product_type_input(name: &str, price: &str) -> LookupInput {
    LookupInput {
        name: name.trim().to_string(),
        price: Some(parse_amount(price)),
        unit: None,
    }
}

fn material_type_input(name: &str, unit: &str) -> LookupInput {
    LookupInput {
        name: name.trim().to_string(),
        price: None,
        unit: opt_str(unit),
    }
}

#[component]
pub fn SystemMaintenanceView() -> Element {
    rsx! {
        div { class: "container",
            PageHeader { title: "System Maintenance", description: "Lookup lists used across the dashboard" }
            div { class: "stat-grid",
                ProductTypesCard {}
                MaterialTypesCard {}
            }
        }
    }
}

#[component]
fn ProductTypesCard() -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);

    let mut data = use_resource(move || {
        let api = session.api();
        async move { api.list::<ProductType>().await }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = product_type_input(&name(), &price());
        if let Err(e) = body.validate() {
            errors.set(field_errors(&e));
            return;
        }
        errors.set(HashMap::new());
        banner.set(None);
        let api = session.api();
        spawn(async move {
            match api.create::<ProductType, _>(&body).await {
                Ok(_) => {
                    name.set(String::new());
                    price.set(String::new());
                    data.restart();
                }
                Err(e) => {
                    let (fields, message) = apply_server_error(&e);
                    errors.set(fields);
                    banner.set(Some(message));
                }
            }
        });
    };

    let remove = move |id: String| {
        let api = session.api();
        spawn(async move {
            match api.delete::<ProductType>(&id).await {
                Ok(()) => data.restart(),
                Err(e) => toast.error(e.message, ToastOptions::new()),
            }
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Product types" }
                CardDescription { "Garments offered, with their list price" }
            }
            CardContent {
                FormError { message: banner() }
                form { class: "inline-form", onsubmit: handle_submit,
                    TextField {
                        name: "name",
                        label: "Name",
                        value: name(),
                        error: error_for(&errors.read(), "name"),
                        on_input: move |evt: FormEvent| name.set(evt.value()),
                    }
                    TextField {
                        name: "price",
                        label: "Price",
                        input_type: "number",
                        value: price(),
                        on_input: move |evt: FormEvent| price.set(evt.value()),
                    }
                    Button { button_type: "submit", "Add" }
                }
                match &*data.read() {
                    None => rsx! { SkeletonTable { rows: 3 } },
                    Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                    Some(Ok(types)) => rsx! {
                        DataTable { columns: columns(&["Name", "Price", ""]),
                            if types.is_empty() {
                                DataTableEmpty { colspan: 3, message: "No product types yet." }
                            }
                            for t in types.iter() {
                                DataTableRow { key: "{t.id}",
                                    DataTableCell { "{t.name}" }
                                    DataTableCell { {format_amount(t.price)} }
                                    DataTableCell {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            size: ButtonSize::Small,
                                            onclick: {
                                                let id = t.id.clone();
                                                move |_| remove(id.clone())
                                            },
                                            "Delete"
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
}

#[component]
fn MaterialTypesCard() -> Element {
    let session = use_session();
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut unit = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut banner = use_signal(|| Option::<String>::None);

    let mut data = use_resource(move || {
        let api = session.api();
        async move { api.list::<RawMaterialType>().await }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = material_type_input(&name(), &unit());
        if let Err(e) = body.validate() {
            errors.set(field_errors(&e));
            return;
        }
        errors.set(HashMap::new());
        banner.set(None);
        let api = session.api();
        spawn(async move {
            match api.create::<RawMaterialType, _>(&body).await {
                Ok(_) => {
                    name.set(String::new());
                    unit.set(String::new());
                    data.restart();
                }
                Err(e) => {
                    let (fields, message) = apply_server_error(&e);
                    errors.set(fields);
                    banner.set(Some(message));
                }
            }
        });
    };

    let remove = move |id: String| {
        let api = session.api();
        spawn(async move {
            match api.delete::<RawMaterialType>(&id).await {
                Ok(()) => data.restart(),
                Err(e) => toast.error(e.message, ToastOptions::new()),
            }
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Raw material types" }
                CardDescription { "Material categories and their stock unit" }
            }
            CardContent {
                FormError { message: banner() }
                form { class: "inline-form", onsubmit: handle_submit,
                    TextField {
                        name: "name",
                        label: "Name",
                        value: name(),
                        error: error_for(&errors.read(), "name"),
                        on_input: move |evt: FormEvent| name.set(evt.value()),
                    }
                    TextField {
                        name: "unit",
                        label: "Unit",
                        placeholder: "m, pcs, spools",
                        value: unit(),
                        on_input: move |evt: FormEvent| unit.set(evt.value()),
                    }
                    Button { button_type: "submit", "Add" }
                }
                match &*data.read() {
                    None => rsx! { SkeletonTable { rows: 3 } },
                    Some(Err(e)) => rsx! { LoadError { message: e.message.clone() } },
                    Some(Ok(types)) => rsx! {
                        DataTable { columns: columns(&["Name", "Unit", ""]),
                            if types.is_empty() {
                                DataTableEmpty { colspan: 3, message: "No material types yet." }
                            }
                            for t in types.iter() {
                                DataTableRow { key: "{t.id}",
                                    DataTableCell { "{t.name}" }
                                    DataTableCell { "{t.unit}" }
                                    DataTableCell {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            size: ButtonSize::Small,
                                            onclick: {
                                                let id = t.id.clone();
                                                move |_| remove(id.clone())
                                            },
                                            "Delete"
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn product_type_carries_price_only() {
        let input = product_type_input(" Necktie ", "85.5");
        assert_eq!(input.name, "Necktie");
        assert_eq!(input.price, Some(85.5));
        assert_eq!(input.unit, None);
    }

    #[test]
    fn material_type_blank_unit_is_none() {
        let input = material_type_input("Thread", "  ");
        assert_eq!(input.unit, None);
        assert_eq!(input.price, None);
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = field_errors(&product_type_input("", "10").validate().unwrap_err());
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
    }
}
