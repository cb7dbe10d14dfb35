//! Cask: a wholesale liquor distribution backend.
//!
//! JSON HTTP API over seven collections (products, customers, orders,
//! users, visits, customer portals, system logs) persisted together in a
//! single flat JSON file. Orders carry the business logic: their lifecycle
//! drives product stock up and down.
//!
//! # Module layout
//!
//! ```text
//! cask-server
//! ├── api        HTTP routes and handlers, one module per resource
//! ├── auth       principal resolution and the permission vocabulary
//! ├── core       config, shared state, server lifecycle
//! ├── orders     order lifecycle -> stock adjustment rules
//! ├── store      the JSON document store and generic collection CRUD
//! └── utils      errors, logging, access log
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod orders;
pub mod store;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use crate::store::{Database, Document, JsonFileStore};
pub use crate::utils::{AppError, AppResult};

/// Load `.env` and initialize logging. Call once, before anything logs.
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::init_logger(&log_level, log_dir.as_deref());
}

/// Startup banner.
pub fn print_banner() {
    println!(
        r#"
   ______           __
  / ____/___ ______/ /__
 / /   / __ `/ ___/ //_/
/ /___/ /_/ (__  ) ,<
\____/\__,_/____/_/|_|

 Wholesale Distribution API
"#
    );
}
