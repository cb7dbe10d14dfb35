//! Unified error handling.
//!
//! [`AppError`] is the one error type handlers return. Its `IntoResponse`
//! renders the wire shape every client of this API expects: the mapped
//! status code with a JSON body of `{"message": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use shared::response::MessageResponse;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// 404: the id is absent from its collection.
    #[error("{0}")]
    NotFound(String),

    /// 400: the body failed type validation or a business check.
    #[error("{0}")]
    Validation(String),

    /// 403: the claimed principal lacks a required capability.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 500: the document store failed to read, parse or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// 500: anything else.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// `permission` is the capability string the caller was missing.
    pub fn forbidden(permission: impl Into<String>) -> Self {
        Self::Forbidden(permission.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(anyhow::Error::new(err).context("entity serialization failed"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        }
        (status, Json(MessageResponse::new(message))).into_response()
    }
}
