//! Application error taxonomy
//!
//! Every fallible boundary call in this crate resolves to a
//! [`FetchError`]. The taxonomy is closed: cancellation, connectivity,
//! transport status, invalid data, unexpected. The `Display` impl is the
//! user-facing message; the original failure is retained as `source()` for
//! diagnostics.

use thiserror::Error;

/// Boxed cause retained on classified errors.
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

/// The closed error taxonomy for catalog fetches.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Cooperative cancellation. Never shown to the user; callers must
    /// propagate it to the owning scope instead of surfacing it.
    #[error("cancelled")]
    Cancelled,

    /// The remote service could not be reached.
    #[error("no connectivity")]
    Connectivity(#[source] Cause),

    /// The remote service answered with a failure status.
    #[error("{}", transport_message(*.status))]
    Transport {
        /// HTTP status code.
        status: u16,
        /// The original transport failure.
        #[source]
        cause: Cause,
    },

    /// A payload or local value failed validation or decoding.
    #[error("invalid data")]
    InvalidData(#[source] Cause),

    /// Anything the other classes do not cover.
    #[error("unexpected")]
    Unexpected(#[source] Cause),
}

impl FetchError {
    /// True for the cooperative-cancellation signal.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type alias for classified operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// User-facing message for a transport status code.
#[must_use]
pub fn transport_message(status: u16) -> String {
    match status {
        400 => "bad request".to_owned(),
        401 => "unauthorized".to_owned(),
        403 => "forbidden".to_owned(),
        404 => "not found".to_owned(),
        500 => "server error".to_owned(),
        503 => "unavailable".to_owned(),
        other => format!("HTTP {other}"),
    }
}
