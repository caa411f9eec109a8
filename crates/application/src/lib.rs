//! Aperture Application - catalog access use cases
//!
//! The application layer turns the raw catalog port into the contracts the
//! presentation layer consumes: the incremental paging engine, the
//! debounced switch-to-latest search pipeline, failure classification, and
//! the single-subject loading projector. All I/O happens behind the ports
//! in [`ports`].

pub mod classifier;
pub mod error;
pub mod loader;
pub mod paging;
pub mod pipeline;
pub mod ports;

pub use classifier::{classified, classify};
pub use error::{Cause, FetchError, FetchResult, transport_message};
pub use loader::SubjectLoader;
pub use paging::{CuratedFeed, PageFetcher, PageSource, SearchFeed};
pub use pipeline::{PipelineConfig, QueryPipeline, SearchUpdate, SubmitError};
