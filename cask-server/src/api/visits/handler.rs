//! Visit API handlers.
//!
//! Visit photos arrive base64-encoded inside the JSON body and are stored
//! as-is. The whole document is rewritten on every mutation, so large photo
//! sets directly inflate write times.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use shared::models::Visit;
use shared::response::MessageResponse;

use crate::core::ServerState;
use crate::store::Collection;
use crate::utils::{AppError, AppResult};

/// GET /api/visits
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Visit>>> {
    let repo = Collection::<Visit>::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/visits/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Visit>> {
    let repo = Collection::<Visit>::new(state.db.clone());
    let visit = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Visit {id} not found")))?;
    Ok(Json(visit))
}

/// POST /api/visits
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Visit>> {
    let repo = Collection::<Visit>::new(state.db.clone());
    let visit = repo.create(body).await?;
    tracing::info!(visit_id = %visit.id, photos = visit.photos.len(), "visit recorded");
    Ok(Json(visit))
}

/// PUT /api/visits/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Visit>> {
    let repo = Collection::<Visit>::new(state.db.clone());
    Ok(Json(repo.update(&id, body).await?))
}

/// DELETE /api/visits/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = Collection::<Visit>::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse::new("Visit deleted")))
}
