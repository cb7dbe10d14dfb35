//! HTTP API.
//!
//! One module per resource family, each exposing `router()`:
//!
//! | Module | Mounted at |
//! |--------|------------|
//! | `products` | `/api/products` |
//! | `customers` | `/api/customers` |
//! | `orders` | `/api/orders` |
//! | `users` | `/api/users` |
//! | `visits` | `/api/visits` |
//! | `portals` | `/api/customer-portals` |
//! | `system_logs` | `/api/system-logs` and `/api/logs` |
//! | `health` | `/api/health` |

pub mod customers;
pub mod health;
pub mod orders;
pub mod portals;
pub mod products;
pub mod system_logs;
pub mod users;
pub mod visits;

use axum::{Router, middleware};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

use crate::auth;
use crate::core::ServerState;
use crate::utils::log_request;

/// Assemble the full application: every resource router plus the
/// middleware stack (principal resolution, CORS, compression, access log).
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(customers::router())
        .merge(orders::router())
        .merge(users::router())
        .merge(visits::router())
        .merge(portals::router())
        .merge(system_logs::router())
        .layer(middleware::from_fn_with_state(state.clone(), auth::identify))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
