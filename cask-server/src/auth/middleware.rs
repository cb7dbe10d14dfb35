//! Principal-resolution middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::core::ServerState;
use crate::utils::AppError;

use super::principal::CurrentUser;

/// Header a client uses to claim an identity. The value is a user id from
/// the `users` collection, trusted as-is.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolve the claimed user id against the store.
///
/// A resolvable, active user is attached to the request for handlers and
/// gates downstream. Anything else (no header, unknown id, inactive user)
/// leaves the request anonymous; the API stays open either way, only gated
/// operations behave differently.
pub async fn identify(
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claimed = request
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    if let Some(user_id) = claimed {
        let doc = state.db.read().await?;
        match doc.users.iter().find(|u| u.id == user_id) {
            Some(user) if user.status.is_active() => {
                request
                    .extensions_mut()
                    .insert(CurrentUser::from_user(user));
            }
            Some(_) => {
                warn!(%user_id, "claimed user is not active, treating request as anonymous");
            }
            None => {
                warn!(%user_id, "claimed user id not found, treating request as anonymous");
            }
        }
    }

    Ok(next.run(request).await)
}
