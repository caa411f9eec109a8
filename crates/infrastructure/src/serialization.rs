//! JSON serialization helpers for deterministic history files.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Serializes a value to deterministic JSON bytes: 2-space indentation and
/// a trailing newline, so repeated saves of equal data are byte-identical.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Deserializes JSON from bytes, pretty-printed or minified.
///
/// # Errors
/// Returns an error if the JSON is invalid or doesn't match the type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn stable_bytes_end_with_newline() {
        let mut map = BTreeMap::new();
        map.insert("key", "value");
        let bytes = to_json_stable_bytes(&map).expect("serialization should work");
        assert_eq!(bytes.last(), Some(&b'\n'));
    }

    #[test]
    fn round_trip_preserves_values() {
        let mut map = BTreeMap::new();
        map.insert("a".to_owned(), 1);
        let bytes = to_json_stable_bytes(&map).expect("serialization should work");
        let back: BTreeMap<String, i32> = from_json_bytes(&bytes).expect("valid JSON");
        assert_eq!(back, map);
    }
}
