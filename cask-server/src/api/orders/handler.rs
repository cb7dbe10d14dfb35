//! Order API handlers.
//!
//! Orders are the one resource whose writes carry side effects. Unlike the
//! other families these handlers do not go through [`Collection`] for
//! mutations: stamping, validation, the approval gate and the stock
//! adjustments all run inside a single [`Database::mutate`] cycle, so an
//! order and its inventory effects are persisted together or not at all.
//!
//! [`Collection`]: crate::store::Collection
//! [`Database::mutate`]: crate::store::Database::mutate

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Map, Value};

use shared::models::{Order, OrderStatus};
use shared::response::MessageResponse;
use shared::util;

use crate::auth::{CurrentUser, MaybeUser, permissions};
use crate::core::ServerState;
use crate::orders::{lifecycle, stock};
use crate::store::{Collection, collection};
use crate::utils::{AppError, AppResult};

/// GET /api/orders
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = Collection::<Order>::new(state.db.clone());
    Ok(Json(repo.find_all().await?))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = Collection::<Order>::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    Ok(Json(order))
}

/// POST /api/orders
///
/// Stamps id, timestamps, order number and totals, then depletes stock for
/// every item if the order lands in a stock-consuming status.
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Order>> {
    let created = state
        .db
        .mutate(move |doc| {
            let mut map = collection::as_object(body)?;
            collection::stamp_new(&mut map);
            fill_generated_fields(&mut map);
            let order: Order = collection::decode(Value::Object(map))?;
            check_items(&order)?;
            stock::apply(doc, &lifecycle::creation(&order));
            doc.orders.push(order.clone());
            Ok(order)
        })
        .await?;

    tracing::info!(
        order_id = %created.id,
        order_number = %created.order_number,
        status = ?created.status,
        items = created.items.len(),
        "order created"
    );
    Ok(Json(created))
}

/// PUT /api/orders/{id}
///
/// Shallow-merges the patch, runs the approval gate when the update decides
/// a pending order, then settles stock against the difference between what
/// the order held before and after.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    MaybeUser(user): MaybeUser,
    Json(body): Json<Value>,
) -> AppResult<Json<Order>> {
    let updated = state
        .db
        .mutate(move |doc| {
            let pos = doc
                .orders
                .iter()
                .position(|o| o.id == id)
                .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
            let before = doc.orders[pos].clone();

            let patch = collection::as_object(body)?;
            let mut after: Order = collection::decode(collection::merge_patch(&before, patch, &id)?)?;
            check_items(&after)?;
            enforce_approval_gate(&before, &mut after, user.as_ref())?;

            stock::apply(doc, &lifecycle::transition(&before, &after));
            doc.orders[pos] = after.clone();

            if before.status != after.status {
                tracing::info!(
                    order_id = %after.id,
                    from = ?before.status,
                    to = ?after.status,
                    "order status changed"
                );
            }
            Ok(after)
        })
        .await?;

    Ok(Json(updated))
}

/// DELETE /api/orders/{id}
///
/// Removing an order returns whatever stock it was holding.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state
        .db
        .mutate(move |doc| {
            let pos = doc
                .orders
                .iter()
                .position(|o| o.id == id)
                .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
            let order = doc.orders.remove(pos);
            stock::apply(doc, &lifecycle::deletion(&order));
            tracing::info!(order_id = %order.id, status = ?order.status, "order deleted");
            Ok(())
        })
        .await?;

    Ok(Json(MessageResponse::new("Order deleted")))
}

/// Fill generated order fields the body left out: the display order number,
/// per-item totals and the order total.
fn fill_generated_fields(map: &mut Map<String, Value>) {
    if collection::is_blank(map, "order_number") {
        map.insert("order_number".into(), Value::String(util::order_number()));
    }

    let mut total = 0.0;
    if let Some(Value::Array(items)) = map.get_mut("items") {
        for item in items.iter_mut() {
            // non-object lines fall through to decode, which rejects them
            let Some(line) = item.as_object_mut() else { continue };
            if collection::is_blank(line, "total_price") {
                let quantity = line.get("quantity").and_then(Value::as_f64);
                let unit_price = line.get("unit_price").and_then(Value::as_f64);
                if let (Some(quantity), Some(unit_price)) = (quantity, unit_price) {
                    line.insert("total_price".into(), Value::from(quantity * unit_price));
                }
            }
            total += line.get("total_price").and_then(Value::as_f64).unwrap_or(0.0);
        }
    }
    if collection::is_blank(map, "total_amount") {
        map.insert("total_amount".into(), Value::from(total));
    }
}

/// Negative quantities would invert stock adjustments, so they are rejected
/// before any effect is computed.
fn check_items(order: &Order) -> AppResult<()> {
    for item in &order.items {
        if item.quantity < 0 {
            return Err(AppError::validation(format!(
                "order item {} has a negative quantity",
                item.product_id
            )));
        }
    }
    Ok(())
}

/// Deciding a pending order (moving it to approved or rejected) requires the
/// `orders:approve` capability when the request carries a principal, and
/// stamps `approved_by` on approval if the body did not set it. Anonymous
/// requests pass through; identity is only ever checked when claimed.
fn enforce_approval_gate(
    before: &Order,
    after: &mut Order,
    user: Option<&CurrentUser>,
) -> AppResult<()> {
    let decides = before.status == OrderStatus::Pending
        && matches!(after.status, OrderStatus::Approved | OrderStatus::Rejected);
    if !decides {
        return Ok(());
    }

    if let Some(user) = user {
        if !user.can(permissions::ORDERS_APPROVE) {
            return Err(AppError::forbidden(permissions::ORDERS_APPROVE));
        }
        if after.status == OrderStatus::Approved && after.approved_by.is_none() {
            after.approved_by = Some(user.id.clone());
        }
    }
    Ok(())
}
