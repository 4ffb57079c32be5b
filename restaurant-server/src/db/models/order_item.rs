//! Order Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Order item entity: one food-and-quantity line within an order
///
/// `total_price` is computed at creation time from the food's unit price and
/// the ordered quantity, rounded half-up to 2 decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Record link to the owning order
    #[serde(with = "serde_helpers::record_id")]
    pub order: RecordId,
    /// Record link to the ordered food
    #[serde(with = "serde_helpers::record_id")]
    pub food: RecordId,
    pub quantity: f64,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single line of an order pack
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub food: RecordId,
    #[validate(range(exclusive_min = 0.0))]
    pub quantity: f64,
}

/// Order pack payload: opens a new order on a table and adds its lines
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderPack {
    #[serde(with = "serde_helpers::record_id")]
    pub dining_table: RecordId,
    #[validate(length(min = 1))]
    #[validate(nested)]
    pub order_items: Vec<OrderItemCreate>,
}

/// Update order item payload
///
/// Replacing the food or the quantity recomputes the line total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub food: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}
