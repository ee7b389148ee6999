//! Canonical JSON bytes: the one serializer used before hashing.
//!
//! Dataset digests and search reports are both hashed from these bytes, so
//! two processes holding the same logical value always agree on the digest.
//!
//! A value is first rebuilt with every object's keys inserted in byte order
//! and every number checked to be an integer, then written by `serde_json`
//! in compact form. Rebuilding keeps the key order fixed whether or not
//! `serde_json`'s `preserve_order` feature is on somewhere in the build.

use serde_json::{Map, Value};

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer (float, NaN, Infinity).
    NonIntegerNumber { raw: String },
    /// `serde_json` failed to write the canonical value.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Serialize { detail } => write!(f, "canonical JSON write failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any JSON number is a float.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let canonical = canonicalize(value)?;
    serde_json::to_vec(&canonical).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn canonicalize(value: &Value) -> Result<Value, CanonError> {
    match value {
        Value::Number(n) if n.is_f64() => Err(CanonError::NonIntegerNumber {
            raw: n.to_string(),
        }),
        Value::Array(items) => items
            .iter()
            .map(canonicalize)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::new();
            for (key, item) in entries {
                sorted.insert(key.clone(), canonicalize(item)?);
            }
            Ok(Value::Object(sorted))
        }
        other => Ok(other.clone()),
    }
}
