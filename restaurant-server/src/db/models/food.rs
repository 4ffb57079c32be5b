//! Food Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Food entity: a priced dish belonging to a menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    /// Unit price in currency units, rounded to 2 decimal places on create
    pub unit_price: f64,
    pub image: String,
    /// Record link to the owning menu
    #[serde(with = "serde_helpers::record_id")]
    pub menu: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create food payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FoodCreate {
    #[validate(length(min = 3, max = 30))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    #[validate(length(min = 1, max = 2048))]
    pub image: String,
    #[serde(with = "serde_helpers::record_id")]
    pub menu: RecordId,
}

/// Update food payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub menu: Option<RecordId>,
}
