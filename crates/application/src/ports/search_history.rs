//! Search history port
//!
//! The storage engine behind recent searches is an external collaborator;
//! this is the four-operation interface the query pipeline consumes.

use async_trait::async_trait;

use aperture_domain::SearchEntry;

/// Errors that can occur during search history operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backend-specific failure.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Repository trait for recent-search persistence.
#[async_trait]
pub trait SearchHistoryStore: Send + Sync {
    /// Returns up to `limit` entries, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<SearchEntry>, StoreError>;

    /// Upserts an entry by query text; on conflict only the timestamp is
    /// replaced.
    async fn insert(&self, query: &str) -> Result<(), StoreError>;

    /// Deletes the entry whose query matches exactly (case-sensitive).
    async fn delete(&self, query: &str) -> Result<(), StoreError>;

    /// Removes all entries.
    async fn clear(&self) -> Result<(), StoreError>;
}
