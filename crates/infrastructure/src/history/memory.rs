//! In-memory recent-search store for tests and ephemeral sessions.

use std::sync::Mutex;

use async_trait::async_trait;

use aperture_application::ports::{Clock, SearchHistoryStore, StoreError};
use aperture_domain::SearchEntry;

/// Search history store holding entries in memory, newest first.
#[derive(Debug, Default)]
pub struct InMemorySearchHistory<K> {
    clock: K,
    entries: Mutex<Vec<SearchEntry>>,
}

impl<K: Clock> InMemorySearchHistory<K> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new(clock: K) -> Self {
        Self {
            clock,
            entries: Mutex::new(Vec::new()),
        }
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut Vec<SearchEntry>) -> R) -> R {
        let mut guard = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

#[async_trait]
impl<K: Clock> SearchHistoryStore for InMemorySearchHistory<K> {
    async fn recent(&self, limit: usize) -> Result<Vec<SearchEntry>, StoreError> {
        Ok(self.with_entries(|entries| entries.iter().take(limit).cloned().collect()))
    }

    async fn insert(&self, query: &str) -> Result<(), StoreError> {
        let entry = SearchEntry::new(query, self.clock.now());
        self.with_entries(|entries| {
            entries.retain(|existing| existing.query != query);
            entries.insert(0, entry);
        });
        Ok(())
    }

    async fn delete(&self, query: &str) -> Result<(), StoreError> {
        self.with_entries(|entries| entries.retain(|existing| existing.query != query));
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.with_entries(Vec::clear);
        Ok(())
    }
}
