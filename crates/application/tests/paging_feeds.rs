//! Integration tests for the catalog-backed page sources.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;

use aperture_application::paging::{CuratedFeed, PageFetcher, SearchFeed};
use aperture_application::ports::{CatalogError, PhotoCatalog, SearchResults};
use aperture_domain::{AuthorProfile, Photo, PhotoAuthor, PhotoUrls};

fn photo(id: &str) -> Photo {
    Photo {
        id: id.into(),
        width: 100,
        height: 100,
        urls: PhotoUrls {
            raw: "https://img.example/raw".into(),
            full: "https://img.example/full".into(),
            regular: "https://img.example/regular".into(),
            small: "https://img.example/small".into(),
            thumb: "https://img.example/thumb".into(),
        },
        author: PhotoAuthor {
            username: "jane".into(),
            name: "Jane Doe".into(),
        },
        likes: 1,
    }
}

/// Catalog serving three feed items and one page of search hits.
struct FixtureCatalog;

#[async_trait]
impl PhotoCatalog for FixtureCatalog {
    async fn list_photos(
        &self,
        page_index: u32,
        _per_page: usize,
    ) -> Result<Vec<Photo>, CatalogError> {
        Ok(match page_index {
            1 => vec![photo("a"), photo("b"), photo("c")],
            _ => Vec::new(),
        })
    }

    async fn search_photos(
        &self,
        query: &str,
        page_index: u32,
        _per_page: usize,
    ) -> Result<SearchResults, CatalogError> {
        let results = if page_index == 1 {
            vec![photo(&format!("{query}-1"))]
        } else {
            Vec::new()
        };
        Ok(SearchResults {
            total: 1,
            total_pages: 1,
            results,
        })
    }

    async fn get_photo(&self, id: &str) -> Result<Photo, CatalogError> {
        Ok(photo(id))
    }

    async fn get_author(&self, _: &str) -> Result<AuthorProfile, CatalogError> {
        Err(CatalogError::Status {
            status: 404,
            message: "Not Found".into(),
        })
    }
}

#[tokio::test]
async fn curated_feed_pages_to_a_clean_end() {
    let catalog = Arc::new(FixtureCatalog);
    let fetcher = PageFetcher::new(CuratedFeed::new(catalog));

    let first = fetcher.load(None, 20).await.unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first.next_key, Some(2));

    let second = fetcher.load(first.next_key, 20).await.unwrap();
    assert!(second.is_empty());
    assert_eq!(second.next_key, None);
    assert_eq!(second.prev_key, Some(1));
}

#[tokio::test]
async fn search_feed_carries_its_query() {
    let catalog = Arc::new(FixtureCatalog);
    let fetcher = PageFetcher::new(SearchFeed::new(catalog, "dunes"));

    let page = fetcher.load(Some(1), 10).await.unwrap();
    assert_eq!(page.items[0].id, "dunes-1");
}
