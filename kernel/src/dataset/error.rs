//! Typed dataset errors.

/// Which relation a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Person,
    Movie,
    Cast,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Person => f.write_str("person"),
            Self::Movie => f.write_str("movie"),
            Self::Cast => f.write_str("cast"),
        }
    }
}

/// Failure loading or querying a [`crate::dataset::DatasetStore`].
///
/// Load errors abort the whole load; no partial store is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// Lookup by id found nothing.
    NotFound { kind: RecordKind, id: String },
    /// A record is structurally malformed (a required field is blank).
    InvalidInput {
        kind: RecordKind,
        index: usize,
        detail: String,
    },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::InvalidInput {
                kind,
                index,
                detail,
            } => write!(f, "invalid {kind} record #{index}: {detail}"),
        }
    }
}

impl std::error::Error for DatasetError {}
