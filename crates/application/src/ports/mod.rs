//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod catalog;
mod clock;
mod search_history;

pub use catalog::{CatalogError, PhotoCatalog, SearchResults};
pub use clock::Clock;
pub use search_history::{SearchHistoryStore, StoreError};
