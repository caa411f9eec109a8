//! Per-item retry generations
//!
//! A failed thumbnail or detail load can be retried for one item without
//! refetching the page. The generation counter is appended to the item's
//! locator as a `retry` query parameter, forcing a miss in any downstream
//! cache keyed by URL. It never touches the network or server state.

use std::collections::HashMap;

use url::Url;

/// In-memory map of entity id to retry generation.
///
/// Owned by a single screen scope; discarded with it. Unseen ids read as 0.
#[derive(Debug, Clone, Default)]
pub struct RetryCache {
    generations: HashMap<String, u64>,
}

impl RetryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the generation for `id` and returns the new value.
    pub fn increment(&mut self, id: &str) -> u64 {
        let entry = self.generations.entry(id.to_owned()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Current generation for `id`, 0 if never retried.
    #[must_use]
    pub fn read(&self, id: &str) -> u64 {
        self.generations.get(id).copied().unwrap_or(0)
    }
}

/// Appends a retry generation to a locator as a cache-defeating parameter.
///
/// A generation of 0 (never retried) leaves the locator untouched so the
/// common path stays cacheable.
///
/// # Errors
/// Returns [`url::ParseError`] when `locator` is not a valid URL.
pub fn busted_url(locator: &str, generation: u64) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(locator)?;
    if generation > 0 {
        url.query_pairs_mut()
            .append_pair("retry", &generation.to_string());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unseen_id_reads_zero() {
        let cache = RetryCache::new();
        assert_eq!(cache.read("nope"), 0);
    }

    #[test]
    fn increment_is_monotonic() {
        let mut cache = RetryCache::new();
        for expected in 1..=5 {
            assert_eq!(cache.increment("abc"), expected);
        }
        assert_eq!(cache.read("abc"), 5);
        assert_eq!(cache.read("other"), 0);
    }

    #[test]
    fn busted_url_appends_generation() {
        let url = busted_url("https://img.example/photo?w=400", 3).unwrap();
        assert_eq!(url.as_str(), "https://img.example/photo?w=400&retry=3");
    }

    #[test]
    fn generation_zero_leaves_url_untouched() {
        let url = busted_url("https://img.example/photo", 0).unwrap();
        assert_eq!(url.as_str(), "https://img.example/photo");
    }
}
