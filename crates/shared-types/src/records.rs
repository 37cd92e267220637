//! Dashboard record types exchanged with the REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Workflow status shared by orders, rentals, commercial jobs and productions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Pending,
    Approved,
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    Completed,
    Cancelled,
    Rejected,
    /// Anything the backend sends that this client does not know yet.
    #[serde(other)]
    Unknown,
}

pub const STATUS_CHOICES: &[Status] = &[
    Status::Pending,
    Status::Approved,
    Status::InProgress,
    Status::Completed,
    Status::Cancelled,
    Status::Rejected,
];

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Approved => "Approved",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::Cancelled => "Cancelled",
            Status::Rejected => "Rejected",
            Status::Unknown => "Unknown",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        STATUS_CHOICES.iter().copied().find(|c| c.as_str() == s)
    }

    /// Completed, cancelled and rejected records accept no further updates.
    pub fn is_final(&self) -> bool {
        matches!(self, Status::Completed | Status::Cancelled | Status::Rejected)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdate {
    pub status: Status,
}

// ---------------------------------------------------------------------------
// Orders and receipts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<DateTime<Utc>>,
    /// Public URL of the uploaded payment receipt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Σ quantity × unit price over all items.
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Student order / appointment request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct NewOrder {
    pub user_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Add at least one item"))
    )]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub order_id: String,
    #[serde(default)]
    pub receipt_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Receipt {
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

// ---------------------------------------------------------------------------
// Rentals and commercial jobs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub item: String,
    pub quantity: u32,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct NewRental {
    pub user_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Item is required"))
    )]
    pub item: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Quantity must be at least 1"))
    )]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommercialJob {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub description: String,
    pub quantity: u32,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct NewCommercialJob {
    pub user_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Describe the job"))
    )]
    pub description: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Quantity must be at least 1"))
    )]
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// Production
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Production {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_type: String,
    pub quantity: u32,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Production form. Also the draft persisted under `formState` while the
/// admin is filling it in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct NewProduction {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Choose a product type"))
    )]
    pub product_type: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Quantity must be at least 1"))
    )]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewProduction {
    pub fn is_blank(&self) -> bool {
        self == &Self::default()
    }
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub material_type: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub reorder_level: f64,
}

impl RawMaterial {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RawMaterialInput {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Choose a material type"))
    )]
    pub material_type: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Quantity cannot be negative"))
    )]
    pub quantity: f64,
    pub unit: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Reorder level cannot be negative"))
    )]
    pub reorder_level: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinishedProduct {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_type: String,
    #[serde(default)]
    pub size: String,
    pub quantity: u32,
    #[serde(default)]
    pub price: f64,
}

impl FinishedProduct {
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct FinishedProductInput {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Choose a product type"))
    )]
    pub product_type: String,
    pub size: String,
    pub quantity: u32,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Price cannot be negative"))
    )]
    pub price: f64,
}

/// Partial update used by the inventory "adjust quantity" action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuantityUpdate {
    pub quantity: f64,
}

// ---------------------------------------------------------------------------
// Lookups (system maintenance)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductType {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawMaterialType {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub unit: String,
}

/// Create form for either lookup list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LookupInput {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Upcoming schedules (at or after `now`), soonest first.
pub fn upcoming(schedules: &[Schedule], now: DateTime<Utc>) -> Vec<Schedule> {
    let mut out: Vec<Schedule> = schedules.iter().filter(|s| s.date >= now).cloned().collect();
    out.sort_by_key(|s| s.date);
    out
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccomplishmentRow {
    pub product_type: String,
    pub target: u32,
    pub accomplished: u32,
}

impl AccomplishmentRow {
    /// accomplished / target, or 0 when there is no target.
    pub fn completion_rate(&self) -> f64 {
        if self.target == 0 {
            0.0
        } else {
            f64::from(self.accomplished) / f64::from(self.target)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccomplishmentReport {
    #[serde(default)]
    pub rows: Vec<AccomplishmentRow>,
}

impl AccomplishmentReport {
    pub fn total_target(&self) -> u32 {
        self.rows.iter().map(|r| r.target).sum()
    }

    pub fn total_accomplished(&self) -> u32 {
        self.rows.iter().map(|r| r.accomplished).sum()
    }

    /// Overall rate across all rows.
    pub fn completion_rate(&self) -> f64 {
        AccomplishmentRow {
            product_type: String::new(),
            target: self.total_target(),
            accomplished: self.total_accomplished(),
        }
        .completion_rate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesRow {
    pub product_type: String,
    pub quantity: u32,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SalesReport {
    #[serde(default)]
    pub rows: Vec<SalesRow>,
}

impl SalesReport {
    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(|r| r.amount).sum()
    }

    pub fn units_sold(&self) -> u32 {
        self.rows.iter().map(|r| r.quantity).sum()
    }
}

// ---------------------------------------------------------------------------
// Home summary
// ---------------------------------------------------------------------------

/// Counts shown on the home tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub orders: usize,
    pub pending_orders: usize,
    pub rentals: usize,
    pub productions: usize,
    pub low_stock_materials: usize,
}

impl DashboardCounts {
    pub fn compute(
        orders: &[Order],
        rentals: &[Rental],
        productions: &[Production],
        materials: &[RawMaterial],
    ) -> Self {
        Self {
            orders: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == Status::Pending)
                .count(),
            rentals: rentals.len(),
            productions: productions.len(),
            low_stock_materials: materials.iter().filter(|m| m.is_low_stock()).count(),
        }
    }
}

/// Format a peso amount with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("₱{amount:.2}")
}
