//! Order Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::billing::{BillingService, OrderSummary};
use crate::core::ServerState;
use crate::db::models::{Order, OrderItem, OrderItemUpdate, OrderPack};
use crate::db::repository::OrderItemRepository;
use crate::utils::{AppError, AppResult, validate_payload};

/// Response for an order pack creation: the opened order and its lines
#[derive(Debug, Serialize)]
pub struct OrderPackResponse {
    pub order: Order,
    pub order_items: Vec<OrderItem>,
}

/// GET /api/order-items
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderItem>>> {
    let repo = OrderItemRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/order-items/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderItem>> {
    let repo = OrderItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order item {} not found", id)))?;
    Ok(Json(item))
}

/// POST /api/order-items
///
/// Opens a new order on the table and inserts its priced lines.
pub async fn create_pack(
    State(state): State<ServerState>,
    Json(payload): Json<OrderPack>,
) -> AppResult<Json<OrderPackResponse>> {
    validate_payload(&payload)?;
    let repo = OrderItemRepository::new(state.db.clone());
    let (order, order_items) = repo.create_pack(payload).await?;
    Ok(Json(OrderPackResponse { order, order_items }))
}

/// GET /api/order-items/order/:order_id
pub async fn summary_by_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<OrderSummary>> {
    let billing = BillingService::new(state.db.clone());
    Ok(Json(billing.order_summary(&order_id).await?))
}

/// PATCH /api/order-items/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderItemUpdate>,
) -> AppResult<Json<OrderItem>> {
    let repo = OrderItemRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload).await?))
}

/// DELETE /api/order-items/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = OrderItemRepository::new(state.db.clone());
    Ok(Json(repo.delete(&id).await?))
}
