//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::billing::{BillingService, InvoiceView};
use crate::core::ServerState;
use crate::db::models::{Invoice, InvoiceCreate, InvoiceUpdate};
use crate::db::repository::InvoiceRepository;
use crate::utils::AppResult;

/// GET /api/invoices
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Invoice>>> {
    let repo = InvoiceRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/invoices/:id
///
/// Returns the invoice merged with its order summary, not the bare record.
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InvoiceView>> {
    let billing = BillingService::new(state.db.clone());
    Ok(Json(billing.invoice_view(&id).await?))
}

/// POST /api/invoices
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InvoiceCreate>,
) -> AppResult<Json<Invoice>> {
    let repo = InvoiceRepository::new(state.db.clone());
    Ok(Json(repo.create(payload).await?))
}

/// PATCH /api/invoices/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InvoiceUpdate>,
) -> AppResult<Json<Invoice>> {
    let repo = InvoiceRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload).await?))
}

/// DELETE /api/invoices/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = InvoiceRepository::new(state.db.clone());
    Ok(Json(repo.delete(&id).await?))
}
