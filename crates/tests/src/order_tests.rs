use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, NewOrder, Order, OrderItem, Status};

use crate::common;

fn shirt(quantity: u32) -> OrderItem {
    OrderItem {
        product_type: "PE Shirt".into(),
        size: Some("L".into()),
        quantity,
        unit_price: 180.0,
    }
}

#[tokio::test]
async fn test_list_orders_and_totals() {
    let backend = common::spawn_backend().await;
    let orders = backend.api().list::<Order>().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].total_amount(), 880.0);
    assert_eq!(orders[0].status, Status::Pending);
}

#[tokio::test]
async fn test_student_creates_appointment_order() {
    let backend = common::spawn_backend().await;
    let api = backend.api_with_token("student-token");
    let new = NewOrder {
        user_id: common::STUDENT_ID.into(),
        items: vec![shirt(3)],
        appointment_date: Some(Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap()),
        receipt: None,
    };

    let created: Order = api.create(&new).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.total_amount(), 540.0);
    assert_eq!(created.appointment_date, new.appointment_date);

    let mine = api.orders_for_user(common::STUDENT_ID).await.unwrap();
    assert_eq!(mine.len(), 2);
}

#[tokio::test]
async fn test_empty_order_is_rejected_with_server_message() {
    let backend = common::spawn_backend().await;
    let err = backend
        .api()
        .create::<Order, _>(&NewOrder::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Validation);
    assert_eq!(err.message, "Order has no items");
}

#[tokio::test]
async fn test_orders_for_other_user_are_empty() {
    let backend = common::spawn_backend().await;
    let orders = backend.api().orders_for_user("someone-else").await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_delete_order() {
    let backend = common::spawn_backend().await;
    backend.api().delete::<Order>("ord-1").await.unwrap();
    assert!(backend.api().list::<Order>().await.unwrap().is_empty());
    assert_eq!(backend.hit_count("DELETE /orders/ord-1"), 1);
}

#[tokio::test]
async fn test_receipt_matches_order_total() {
    let backend = common::spawn_backend().await;
    let receipt = backend.api().order_receipt("ord-1").await.unwrap();
    assert_eq!(receipt.order_id, "ord-1");
    assert_eq!(receipt.receipt_number, "OR-0001");
    assert_eq!(receipt.total(), 880.0);
}

#[tokio::test]
async fn test_missing_receipt_is_not_found() {
    let backend = common::spawn_backend().await;
    let err = backend.api().order_receipt("ord-404").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_sales_report_grand_total() {
    let backend = common::spawn_backend().await;
    let report = backend.api().sales_report().await.unwrap();
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.grand_total(), 4220.0);
    assert_eq!(report.units_sold(), 14);
}
