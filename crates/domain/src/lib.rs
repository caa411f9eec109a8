//! Aperture Domain - Core catalog types
//!
//! This crate defines the domain model for the Aperture photo catalog
//! client. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod history;
pub mod page;
pub mod photo;
pub mod query;
pub mod retry;
pub mod state;

pub use error::{DomainError, DomainResult};
pub use history::SearchEntry;
pub use page::{MAX_PAGE_SIZE, Page, PageRequest, prev_key_for, refresh_key};
pub use photo::{AuthorProfile, Photo, PhotoAuthor, PhotoUrls};
pub use query::{DEFAULT_DEBOUNCE_MS, QueryState};
pub use retry::{RetryCache, busted_url};
pub use state::UiState;
