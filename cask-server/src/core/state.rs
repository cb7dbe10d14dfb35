//! Shared server state.

use std::sync::Arc;

use tracing::info;

use crate::store::{Database, JsonFileStore};
use crate::utils::AppResult;

use super::Config;

/// State threaded through every handler. Cloning is cheap.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Database,
}

impl ServerState {
    pub fn new(config: Config, db: Database) -> Self {
        Self { config, db }
    }

    /// Open the document store behind `config.data_file` and verify it
    /// loads. A corrupt file fails startup here, before the listener binds,
    /// rather than on the first request.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let store = JsonFileStore::new(&config.data_file);
        let db = Database::new(Arc::new(store));

        let doc = db.read().await?;
        info!(
            data_file = %config.data_file.display(),
            products = doc.products.len(),
            customers = doc.customers.len(),
            orders = doc.orders.len(),
            users = doc.users.len(),
            visits = doc.visits.len(),
            customer_portals = doc.customer_portals.len(),
            system_logs = doc.system_logs.len(),
            "document store ready"
        );

        Ok(Self::new(config.clone(), db))
    }
}
