//! File-backed recent-search persistence.
//!
//! Stores recent searches in the platform-specific config directory:
//! - Linux/macOS: ~/.config/aperture/recent_searches.json
//! - Windows: %APPDATA%/aperture/recent_searches.json
//!
//! Entries are kept newest first on disk, so `recent` is a load plus a
//! truncate.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use aperture_application::ports::{Clock, SearchHistoryStore, StoreError};
use aperture_domain::SearchEntry;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Search history store persisting to a JSON file.
#[derive(Debug, Clone)]
pub struct FileSearchHistory<K> {
    clock: K,
    path: Option<PathBuf>,
}

impl<K: Clock> FileSearchHistory<K> {
    /// Creates a store at the platform default location.
    #[must_use]
    pub fn new(clock: K) -> Self {
        Self {
            clock,
            path: default_path(),
        }
    }

    /// Creates a store at an explicit file path.
    #[must_use]
    pub const fn with_path(clock: K, path: PathBuf) -> Self {
        Self {
            clock,
            path: Some(path),
        }
    }

    fn path(&self) -> Result<&PathBuf, StoreError> {
        self.path
            .as_ref()
            .ok_or_else(|| StoreError::Storage("could not determine config directory".to_owned()))
    }

    /// Loads all entries, newest first. A missing file is an empty history.
    async fn load(&self) -> Result<Vec<SearchEntry>, StoreError> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read(path).await?;
        from_json_bytes(&content).map_err(|error| StoreError::Serialization(error.to_string()))
    }

    async fn save(&self, entries: &[SearchEntry]) -> Result<(), StoreError> {
        let path = self.path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = to_json_stable_bytes(&entries)
            .map_err(|error| StoreError::Serialization(error.to_string()))?;
        fs::write(path, content).await?;
        Ok(())
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aperture").join("recent_searches.json"))
}

#[async_trait]
impl<K: Clock> SearchHistoryStore for FileSearchHistory<K> {
    async fn recent(&self, limit: usize) -> Result<Vec<SearchEntry>, StoreError> {
        let mut entries = self.load().await?;
        entries.truncate(limit);
        Ok(entries)
    }

    async fn insert(&self, query: &str) -> Result<(), StoreError> {
        let mut entries = self.load().await?;
        entries.retain(|entry| entry.query != query);
        entries.insert(0, SearchEntry::new(query, self.clock.now()));
        tracing::debug!(query, "recent search persisted");
        self.save(&entries).await
    }

    async fn delete(&self, query: &str) -> Result<(), StoreError> {
        let mut entries = self.load().await?;
        entries.retain(|entry| entry.query != query);
        self.save(&entries).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.save(&[]).await
    }
}
