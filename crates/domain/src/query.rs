//! Search query session state
//!
//! One [`QueryState`] exists per active search session. It tracks the raw
//! text under edit and the last value that was admitted downstream, so the
//! pipeline can dedupe admissions after the debounce window.

/// Default debounce quiet period for query admission, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Mutable state of a single search session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// The raw query text as currently edited.
    pub raw: String,
    /// The last value admitted to the fetch stage, if any.
    pub last_admitted: Option<String>,
}

impl QueryState {
    /// Creates a fresh session with empty text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a raw edit.
    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    /// Returns the trimmed candidate if it is admissible right now:
    /// non-empty after trimming and different from the last admitted value.
    #[must_use]
    pub fn candidate(&self) -> Option<&str> {
        let trimmed = self.raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if self.last_admitted.as_deref() == Some(trimmed) {
            return None;
        }
        Some(trimmed)
    }

    /// Marks a value as admitted, suppressing duplicate admissions.
    pub fn mark_admitted(&mut self, query: impl Into<String>) {
        self.last_admitted = Some(query.into());
    }
}
