//! System log API.

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

/// Mounted twice: the admin screens call `/api/system-logs`, the older
/// client builds still post to `/api/logs`.
pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/system-logs", routes())
        .nest("/api/logs", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
