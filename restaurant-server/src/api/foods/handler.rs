//! Food API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Food, FoodCreate, FoodUpdate};
use crate::db::repository::FoodRepository;
use crate::utils::{AppError, AppResult, validate_payload};

/// GET /api/foods
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Food>>> {
    let repo = FoodRepository::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/foods/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Food>> {
    let repo = FoodRepository::new(state.db.clone());
    let food = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Food {} not found", id)))?;
    Ok(Json(food))
}

/// POST /api/foods
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<FoodCreate>,
) -> AppResult<Json<Food>> {
    validate_payload(&payload)?;
    let repo = FoodRepository::new(state.db.clone());
    Ok(Json(repo.create(payload).await?))
}

/// PATCH /api/foods/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<FoodUpdate>,
) -> AppResult<Json<Food>> {
    let repo = FoodRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload).await?))
}

/// DELETE /api/foods/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = FoodRepository::new(state.db.clone());
    Ok(Json(repo.delete(&id).await?))
}
