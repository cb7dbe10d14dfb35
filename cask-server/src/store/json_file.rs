//! Flat-file JSON persistence.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{Document, DocumentStore, StoreError, StoreResult};

/// Stores the whole document as pretty-printed JSON in a single file.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place, so
/// a crash mid-write leaves the previous document intact rather than a
/// truncated one. A missing file reads as an empty document; a present but
/// unparseable file is surfaced as [`StoreError::Corrupt`].
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self) -> StoreResult<Document> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok(Document::default());
            }
            Err(err) => {
                return Err(StoreError::Read {
                    path: self.display_path(),
                    source: err,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|err| StoreError::Corrupt {
            path: self.display_path(),
            source: err,
        })
    }

    async fn save(&self, doc: &Document) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(doc).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| StoreError::Write {
                    path: self.display_path(),
                    source: err,
                })?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, &json)
            .await
            .map_err(|err| StoreError::Write {
                path: temp.display().to_string(),
                source: err,
            })?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|err| StoreError::Write {
                path: self.display_path(),
                source: err,
            })?;
        Ok(())
    }
}
