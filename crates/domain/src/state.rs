//! Loading state for single-subject fetches
//!
//! [`UiState`] is the three-state machine the presentation layer binds to
//! for any independently loaded subject (one photo, one profile). It starts
//! in `Loading`, moves to `Content` or `Error`, and an explicit reload goes
//! back through `Loading` first; there is no stale-while-revalidate state.

use serde::{Deserialize, Serialize};

/// Presentation state of one loaded subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UiState<T> {
    /// Fetch in flight; show a spinner.
    Loading,

    /// Fetch succeeded.
    Content {
        /// The loaded subject.
        data: T,
    },

    /// Fetch failed.
    Error {
        /// Human-readable message for display.
        message: String,
    },
}

impl<T> Default for UiState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> UiState<T> {
    /// Creates a `Content` state.
    #[must_use]
    pub fn content(data: T) -> Self {
        Self::Content { data }
    }

    /// Creates an `Error` state.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// True while the fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded subject, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Content { data } => Some(data),
            _ => None,
        }
    }

    /// The error message, if the fetch failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_loading() {
        let state: UiState<u32> = UiState::default();
        assert!(state.is_loading());
        assert_eq!(state.data(), None);
    }

    #[test]
    fn content_exposes_data() {
        let state = UiState::content(7);
        assert_eq!(state.data(), Some(&7));
        assert!(!state.is_loading());
    }

    #[test]
    fn error_exposes_message() {
        let state: UiState<u32> = UiState::error("not found");
        assert_eq!(state.error_message(), Some("not found"));
    }
}
