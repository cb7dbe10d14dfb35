//! Shared types and helpers for the Cask wholesale backend.
//!
//! Everything the wire contract is made of lives here: the entity models for
//! each collection, the shallow-merge semantics PUT handlers use, the
//! `{"message": ...}` response shape, and the identifier / timestamp
//! generators. The server crate depends on this one; clients can too.

pub mod merge;
pub mod models;
pub mod response;
pub mod util;
