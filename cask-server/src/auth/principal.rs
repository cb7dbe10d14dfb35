//! The resolved principal and its extractor.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use shared::models::User;

use super::permissions;

/// The user record a request resolved to, trimmed to what handlers need.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub role_name: Option<String>,
    pub permissions: Vec<String>,
}

impl CurrentUser {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user
                .name
                .clone()
                .or_else(|| user.username.clone())
                .unwrap_or_else(|| user.id.clone()),
            role_name: user.role_name.clone(),
            permissions: user.permissions.clone(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role_name.as_deref() == Some("admin")
    }

    pub fn can(&self, permission: &str) -> bool {
        self.is_admin() || permissions::has_permission(&self.permissions, permission)
    }
}

/// Extracts the principal the `identify` middleware resolved, if any.
///
/// Never rejects: an anonymous request yields `MaybeUser(None)` and the
/// handler decides what that means for the operation at hand.
pub struct MaybeUser(pub Option<CurrentUser>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<CurrentUser>().cloned()))
    }
}
