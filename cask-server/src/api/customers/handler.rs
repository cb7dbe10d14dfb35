//! Customer API handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use shared::models::Customer;
use shared::response::MessageResponse;

use crate::core::ServerState;
use crate::store::Collection;
use crate::utils::{AppError, AppResult};

/// GET /api/customers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    let repo = Collection::<Customer>::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/customers/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    let repo = Collection::<Customer>::new(state.db.clone());
    let customer = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {id} not found")))?;
    Ok(Json(customer))
}

/// POST /api/customers
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Customer>> {
    let repo = Collection::<Customer>::new(state.db.clone());
    let customer = repo.create(body).await?;
    tracing::info!(customer_id = %customer.id, name = %customer.name, "customer created");
    Ok(Json(customer))
}

/// PUT /api/customers/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Customer>> {
    let repo = Collection::<Customer>::new(state.db.clone());
    Ok(Json(repo.update(&id, body).await?))
}

/// DELETE /api/customers/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = Collection::<Customer>::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(MessageResponse::new("Customer deleted")))
}
