//! Wire response shapes.
//!
//! Successful reads and writes return the bare entity (or a bare array).
//! The only structured body is [`MessageResponse`], used by deletes and by
//! every error the server renders.

use serde::{Deserialize, Serialize};

/// `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
