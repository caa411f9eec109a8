//! Photo catalog port
//!
//! Defines the interface to the remote photo service. Adapters in the
//! infrastructure layer implement this trait; everything above it consumes
//! typed results and [`CatalogError`] failures.

use async_trait::async_trait;

use aperture_domain::{AuthorProfile, Photo};

/// Errors an adapter can report from the remote catalog.
///
/// These are raw failures, prior to classification into the user-facing
/// taxonomy. Messages carry the underlying error text so the cause chain
/// stays useful for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The operation was cancelled cooperatively.
    #[error("operation cancelled")]
    Cancelled,

    /// The service could not be reached at all.
    #[error("connection failed: {message}")]
    Connectivity {
        /// Underlying transport error text.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("HTTP status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Status line or response excerpt.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("malformed payload: {message}")]
    Decode {
        /// Decoder error text.
        message: String,
    },

    /// Anything else.
    #[error("{message}")]
    Other {
        /// Error text.
        message: String,
    },
}

/// One page of search results, with the envelope totals the service reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Total matching photos across all pages.
    pub total: u64,
    /// Total number of pages at the requested size.
    pub total_pages: u32,
    /// The photos on this page.
    pub results: Vec<Photo>,
}

/// Port to the remote photo catalog.
///
/// Page indices are 1-based; `per_page` is already clamped by the caller.
/// Photo records failing required-field validation are dropped by the
/// adapter, never surfaced as errors.
#[async_trait]
pub trait PhotoCatalog: Send + Sync {
    /// Lists one page of the curated feed.
    async fn list_photos(
        &self,
        page_index: u32,
        per_page: usize,
    ) -> Result<Vec<Photo>, CatalogError>;

    /// Searches photos, returning the paged envelope.
    async fn search_photos(
        &self,
        query: &str,
        page_index: u32,
        per_page: usize,
    ) -> Result<SearchResults, CatalogError>;

    /// Fetches a single photo by id.
    async fn get_photo(&self, id: &str) -> Result<Photo, CatalogError>;

    /// Fetches an author profile by username.
    async fn get_author(&self, username: &str) -> Result<AuthorProfile, CatalogError>;
}
