//! Product API handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use shared::models::Product;
use shared::response::MessageResponse;

use crate::core::ServerState;
use crate::store::Collection;
use crate::utils::{AppError, AppResult};

/// GET /api/products
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = Collection::<Product>::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = Collection::<Product>::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Product>> {
    let repo = Collection::<Product>::new(state.db.clone());
    let product = repo.create(body).await?;
    tracing::info!(product_id = %product.id, name = %product.name, "product created");
    Ok(Json(product))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Product>> {
    let repo = Collection::<Product>::new(state.db.clone());
    Ok(Json(repo.update(&id, body).await?))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = Collection::<Product>::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse::new("Product deleted")))
}
