//! Failure classification
//!
//! Maps raw catalog failures into the closed [`FetchError`] taxonomy.
//! First match wins, and the order is part of the contract: cancellation
//! always passes through unchanged, before any conversion into a
//! message-bearing error. The mapping is pure and performs no I/O.

use std::future::Future;

use crate::error::{FetchError, FetchResult};
use crate::ports::CatalogError;

/// Classifies one catalog failure.
///
/// Order, first match wins:
/// 1. cancellation, forwarded unchanged;
/// 2. connectivity;
/// 3. transport status (message via the status table);
/// 4. malformed payload;
/// 5. anything else.
///
/// The original error becomes the `source()` of the classified value.
#[must_use]
pub fn classify(error: CatalogError) -> FetchError {
    match error {
        CatalogError::Cancelled => FetchError::Cancelled,
        error @ CatalogError::Connectivity { .. } => FetchError::Connectivity(Box::new(error)),
        CatalogError::Status { status, message } => FetchError::Transport {
            status,
            cause: Box::new(CatalogError::Status { status, message }),
        },
        error @ CatalogError::Decode { .. } => FetchError::InvalidData(Box::new(error)),
        error @ CatalogError::Other { .. } => FetchError::Unexpected(Box::new(error)),
    }
}

/// Runs one fallible catalog operation and classifies its failure.
///
/// # Errors
/// Returns the classified [`FetchError`]; cancellation propagates as
/// [`FetchError::Cancelled`] without conversion.
pub async fn classified<T, F>(op: F) -> FetchResult<T>
where
    F: Future<Output = Result<T, CatalogError>> + Send,
{
    op.await.map_err(classify)
}
