//! Recent-search entries
//!
//! The storage engine behind recent searches is an external collaborator;
//! only its entry shape lives here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted recent search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// The submitted query text, trimmed.
    pub query: String,
    /// When the query was last submitted.
    pub timestamp: DateTime<Utc>,
}

impl SearchEntry {
    /// Creates an entry for a submission at `timestamp`.
    #[must_use]
    pub fn new(query: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            query: query.into(),
            timestamp,
        }
    }
}
