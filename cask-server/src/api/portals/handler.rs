//! Customer portal API handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use shared::models::CustomerPortal;
use shared::response::MessageResponse;
use shared::util;

use crate::core::ServerState;
use crate::store::{Collection, collection};
use crate::utils::{AppError, AppResult};

/// GET /api/customer-portals
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<CustomerPortal>>> {
    let repo = Collection::<CustomerPortal>::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/customer-portals/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CustomerPortal>> {
    let repo = Collection::<CustomerPortal>::new(state.db.clone());
    let portal = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer portal {id} not found")))?;
    Ok(Json(portal))
}

/// POST /api/customer-portals
///
/// Generates the portal's `unique_url` slug when the body has none.
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<CustomerPortal>> {
    let mut map = collection::as_object(body)?;
    if collection::is_blank(&map, "unique_url") {
        map.insert("unique_url".into(), Value::String(util::portal_slug()));
    }

    let repo = Collection::<CustomerPortal>::new(state.db.clone());
    let portal = repo.create(Value::Object(map)).await?;
    tracing::info!(portal_id = %portal.id, unique_url = %portal.unique_url, "portal created");
    Ok(Json(portal))
}

/// PUT /api/customer-portals/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<CustomerPortal>> {
    let repo = Collection::<CustomerPortal>::new(state.db.clone());
    Ok(Json(repo.update(&id, body).await?))
}

/// DELETE /api/customer-portals/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = Collection::<CustomerPortal>::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse::new("Customer portal deleted")))
}
