//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures and broken internal contracts.
//! A search that simply finds no path is not an error; it ends with
//! [`crate::search::SearchOutcome::NotConnected`].

use costar_kernel::dataset::DatasetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The source or target id is not a loaded person.
    UnknownPerson { id: String },
    /// `Frontier::remove` was called on an empty frontier.
    EmptyFrontier,
    /// The policy asks for something the engine cannot honor.
    UnsupportedPolicyMode { detail: String },
    /// A dataset lookup failed while naming a found path.
    Dataset(DatasetError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPerson { id } => write!(f, "unknown person id: {id}"),
            Self::EmptyFrontier => f.write_str("remove from empty frontier"),
            Self::UnsupportedPolicyMode { detail } => {
                write!(f, "unsupported policy mode: {detail}")
            }
            Self::Dataset(e) => write!(f, "dataset error: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dataset(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DatasetError> for SearchError {
    fn from(e: DatasetError) -> Self {
        Self::Dataset(e)
    }
}
