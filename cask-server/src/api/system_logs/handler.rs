//! System log API handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use shared::models::SystemLog;
use shared::response::MessageResponse;

use crate::core::ServerState;
use crate::store::Collection;
use crate::utils::{AppError, AppResult};

/// GET /api/system-logs
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SystemLog>>> {
    let repo = Collection::<SystemLog>::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/system-logs/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SystemLog>> {
    let repo = Collection::<SystemLog>::new(state.db.clone());
    let entry = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("System log {id} not found")))?;
    Ok(Json(entry))
}

/// POST /api/system-logs
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<SystemLog>> {
    let repo = Collection::<SystemLog>::new(state.db.clone());
    Ok(Json(repo.create(body).await?))
}

/// PUT /api/system-logs/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<SystemLog>> {
    let repo = Collection::<SystemLog>::new(state.db.clone());
    Ok(Json(repo.update(&id, body).await?))
}

/// DELETE /api/system-logs/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = Collection::<SystemLog>::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse::new("System log deleted")))
}
