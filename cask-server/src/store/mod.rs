//! Document store.
//!
//! All seven collections live in one JSON document ([`Document`]) behind the
//! [`DocumentStore`] trait. [`Database`] is the handle the rest of the server
//! uses: reads load a fresh snapshot, writes run as serialized
//! read-modify-write cycles so concurrent requests can never drop each
//! other's changes.

pub mod collection;
pub mod document;
pub mod json_file;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::utils::{AppError, AppResult};
pub use collection::Collection;
pub use document::{Document, Entity};
pub use json_file::JsonFileStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data file {path} is not valid JSON: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode document: {0}")]
    Encode(serde_json::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::storage(err.to_string())
    }
}

/// Persistence backend for the whole document.
///
/// `load` returns an empty document when nothing has been stored yet;
/// anything unreadable or unparseable is an error, never silently reset.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(&self) -> StoreResult<Document>;
    async fn save(&self, doc: &Document) -> StoreResult<()>;
}

/// Shared handle over a [`DocumentStore`].
///
/// Cloning is cheap; all clones share one write lock.
#[derive(Clone)]
pub struct Database {
    store: Arc<dyn DocumentStore>,
    write_lock: Arc<Mutex<()>>,
}

impl Database {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load a fresh snapshot of the document.
    ///
    /// The file is the source of truth: nothing is cached between requests,
    /// so edits made out-of-band show up on the next read.
    pub async fn read(&self) -> AppResult<Document> {
        Ok(self.store.load().await?)
    }

    /// Run one read-modify-write cycle.
    ///
    /// The write lock serializes cycles across all clones of this handle.
    /// The modified document is persisted only when `f` returns `Ok`, so a
    /// failed operation leaves the stored document untouched.
    pub async fn mutate<R, F>(&self, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut Document) -> AppResult<R>,
    {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.store.load().await?;
        let result = f(&mut doc)?;
        self.store.save(&doc).await?;
        Ok(result)
    }
}
