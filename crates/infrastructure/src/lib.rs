//! Aperture Infrastructure - adapters for external systems
//!
//! Implements the application-layer ports: the reqwest-backed photo
//! catalog, the recent-search stores, and the system clock.

pub mod adapters;
pub mod history;
pub mod http;
pub mod serialization;

pub use adapters::SystemClock;
pub use history::{FileSearchHistory, InMemorySearchHistory};
pub use http::{CatalogConfig, HttpPhotoCatalog};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};
