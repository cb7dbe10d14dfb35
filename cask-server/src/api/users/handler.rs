//! User API handlers.
//!
//! Plain CRUD. Nothing here hashes or checks credentials; user records are
//! roster entries whose `permissions` arrays feed the order-approval gate.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use shared::models::User;
use shared::response::MessageResponse;

use crate::core::ServerState;
use crate::store::Collection;
use crate::utils::{AppError, AppResult};

/// GET /api/users
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let repo = Collection::<User>::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let repo = Collection::<User>::new(state.db.clone());
    let user = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
    Ok(Json(user))
}

/// POST /api/users
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<User>> {
    let repo = Collection::<User>::new(state.db.clone());
    let user = repo.create(body).await?;
    tracing::info!(user_id = %user.id, "user created");
    Ok(Json(user))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<User>> {
    let repo = Collection::<User>::new(state.db.clone());
    Ok(Json(repo.update(&id, body).await?))
}

/// DELETE /api/users/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = Collection::<User>::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse::new("User deleted")))
}
