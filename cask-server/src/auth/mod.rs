//! Identity and permissions.
//!
//! Authentication lives outside this server. Requests may carry an
//! `x-user-id` header naming a user record; the [`identify`] middleware
//! resolves it against the `users` collection and handlers read the result
//! through [`MaybeUser`]. The only write that is actually gated is moving
//! an order out of `pending` (see [`permissions::ORDERS_APPROVE`]).

pub mod middleware;
pub mod permissions;
pub mod principal;

pub use middleware::{USER_ID_HEADER, identify};
pub use principal::{CurrentUser, MaybeUser};
