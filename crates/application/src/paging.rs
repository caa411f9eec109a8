//! Incremental paging engine
//!
//! [`PageFetcher`] turns a `(page_index, requested_size)` pair into a
//! [`Page`] of items from any [`PageSource`]. The requested size is clamped
//! to the catalog maximum before it reaches the wire; navigation keys follow
//! the page invariants; failures are classified, except cancellation which
//! propagates unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use aperture_domain::{MAX_PAGE_SIZE, Page, PageRequest, Photo, prev_key_for, refresh_key};

use crate::classifier::classified;
use crate::error::{FetchError, FetchResult};
use crate::ports::{CatalogError, PhotoCatalog};

/// A source of items addressable by `(page_index, per_page)`.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// The item type this source yields.
    type Item: Send;

    /// Fetches one page of items. An empty vector means end of stream.
    async fn fetch(&self, page_index: u32, per_page: usize)
    -> Result<Vec<Self::Item>, CatalogError>;
}

/// The curated photo feed, backed by the catalog port.
pub struct CuratedFeed<C> {
    catalog: Arc<C>,
}

impl<C> CuratedFeed<C> {
    /// Wraps a catalog as a pageable feed.
    #[must_use]
    pub const fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl<C: PhotoCatalog> PageSource for CuratedFeed<C> {
    type Item = Photo;

    async fn fetch(&self, page_index: u32, per_page: usize) -> Result<Vec<Photo>, CatalogError> {
        self.catalog.list_photos(page_index, per_page).await
    }
}

/// Search results for one fixed query, backed by the catalog port.
///
/// The query pipeline delivers page 1 of a search; this source lets the
/// presentation layer paginate the remaining pages of the same query.
pub struct SearchFeed<C> {
    catalog: Arc<C>,
    query: String,
}

impl<C> SearchFeed<C> {
    /// Wraps a catalog as a pageable search for `query`.
    #[must_use]
    pub fn new(catalog: Arc<C>, query: impl Into<String>) -> Self {
        Self {
            catalog,
            query: query.into(),
        }
    }
}

#[async_trait]
impl<C: PhotoCatalog> PageSource for SearchFeed<C> {
    type Item = Photo;

    async fn fetch(&self, page_index: u32, per_page: usize) -> Result<Vec<Photo>, CatalogError> {
        self.catalog
            .search_photos(&self.query, page_index, per_page)
            .await
            .map(|results| results.results)
    }
}

/// Generic paging engine over a [`PageSource`].
pub struct PageFetcher<S> {
    source: S,
    max_page_size: usize,
}

impl<S: PageSource> PageFetcher<S> {
    /// Creates a fetcher with the catalog's maximum page size.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            max_page_size: MAX_PAGE_SIZE,
        }
    }

    /// Overrides the size clamp, for sources with a different maximum.
    #[must_use]
    pub const fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    /// Loads one page. `page_index` defaults to 1 (first load or refresh).
    ///
    /// On success the page keys follow the invariants: `prev_key` from the
    /// index alone, `next_key` absent only on an empty page.
    ///
    /// # Errors
    /// Any source failure is classified into [`FetchError`]; cancellation
    /// propagates as [`FetchError::Cancelled`] without conversion. The
    /// backward key stays derivable from [`Self::prev_key`] regardless.
    pub async fn load(
        &self,
        page_index: Option<u32>,
        requested_size: usize,
    ) -> FetchResult<Page<S::Item>> {
        let index = page_index.unwrap_or(1);
        let request = PageRequest::new(index, requested_size)
            .map_err(|error| FetchError::InvalidData(Box::new(error)))?;
        let effective = request.effective_size(self.max_page_size);

        let items = classified(self.source.fetch(index, effective)).await?;
        tracing::debug!(page_index = index, items = items.len(), "page loaded");

        Ok(Page::assemble(index, items))
    }

    /// Backward navigation key for `page_index`, valid even when the
    /// forward fetch for that index failed.
    #[must_use]
    pub const fn prev_key(page_index: u32) -> Option<u32> {
        prev_key_for(page_index)
    }

    /// Page key a refresh should resume from, given the flat anchor
    /// position and the pages loaded so far.
    #[must_use]
    pub fn resume_key(anchor: usize, loaded: &[Page<S::Item>]) -> u32 {
        refresh_key(anchor, loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Source yielding a fixed number of total items, recording the sizes
    /// it was asked for.
    struct CountedSource {
        total: usize,
        seen_sizes: Mutex<Vec<usize>>,
    }

    impl CountedSource {
        fn new(total: usize) -> Self {
            Self {
                total,
                seen_sizes: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PageSource for CountedSource {
        type Item = usize;

        async fn fetch(
            &self,
            page_index: u32,
            per_page: usize,
        ) -> Result<Vec<usize>, CatalogError> {
            self.seen_sizes.lock().unwrap().push(per_page);
            let start = (page_index as usize - 1) * per_page;
            let end = (start + per_page).min(self.total);
            Ok((start..end.max(start)).collect())
        }
    }

    struct FailingSource(fn() -> CatalogError);

    #[async_trait]
    impl PageSource for FailingSource {
        type Item = usize;

        async fn fetch(&self, _: u32, _: usize) -> Result<Vec<usize>, CatalogError> {
            Err((self.0)())
        }
    }

    #[tokio::test]
    async fn requested_size_is_clamped_to_max() {
        let source = CountedSource::new(100);
        let fetcher = PageFetcher::new(source);
        let page = fetcher.load(Some(1), 25).await.unwrap();
        assert_eq!(page.len(), 20);
        assert_eq!(fetcher.source.seen_sizes.lock().unwrap().as_slice(), &[20]);
    }

    #[tokio::test]
    async fn first_load_defaults_to_page_one() {
        let fetcher = PageFetcher::new(CountedSource::new(5));
        let page = fetcher.load(None, 10).await.unwrap();
        assert_eq!(page.prev_key, None);
        assert_eq!(page.next_key, Some(2));
        assert_eq!(page.items, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn end_of_stream_is_a_clean_empty_page() {
        let fetcher = PageFetcher::new(CountedSource::new(3)).with_max_page_size(10);
        let first = fetcher.load(Some(1), 10).await.unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first.next_key, Some(2));

        let second = fetcher.load(Some(2), 10).await.unwrap();
        assert!(second.is_empty());
        assert_eq!(second.next_key, None);
        assert_eq!(second.prev_key, Some(1));
    }

    #[tokio::test]
    async fn failures_are_classified() {
        let fetcher = PageFetcher::new(FailingSource(|| CatalogError::Status {
            status: 503,
            message: "Service Unavailable".into(),
        }));
        let error = fetcher.load(Some(2), 10).await.unwrap_err();
        assert_eq!(error.to_string(), "unavailable");
        // Backward navigation survives the failed forward fetch.
        assert_eq!(PageFetcher::<FailingSource>::prev_key(2), Some(1));
    }

    #[tokio::test]
    async fn cancellation_is_not_an_error_page() {
        let fetcher = PageFetcher::new(FailingSource(|| CatalogError::Cancelled));
        let error = fetcher.load(None, 10).await.unwrap_err();
        assert!(error.is_cancelled());
    }

    #[tokio::test]
    async fn zero_size_request_is_invalid_data() {
        let fetcher = PageFetcher::new(CountedSource::new(5));
        let error = fetcher.load(Some(1), 0).await.unwrap_err();
        assert_eq!(error.to_string(), "invalid data");
    }

    #[test]
    fn resume_key_follows_the_canonical_rule() {
        let loaded = vec![
            Page::assemble(1, vec![0usize; 10]),
            Page::assemble(2, vec![0usize; 10]),
        ];
        assert_eq!(PageFetcher::<CountedSource>::resume_key(15, &loaded), 2);
        assert_eq!(PageFetcher::<CountedSource>::resume_key(3, &loaded), 1);
        assert_eq!(PageFetcher::<CountedSource>::resume_key(0, &[]), 1);
    }
}
