//! Dataset: people, movies and the cast relation between them.
//!
//! Records come in through [`record`]; [`store::DatasetStore`] owns the
//! loaded relations and answers every lookup the search needs.

pub mod error;
pub mod record;
pub mod store;

use std::collections::BTreeSet;

pub use error::{DatasetError, RecordKind};
pub use store::{DatasetStore, LoadSummary};

/// Opaque person identifier (unique per person).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(String);

/// Opaque movie identifier (unique per movie).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(String);

macro_rules! string_id {
    ($ty:ident) => {
        impl $ty {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(PersonId);
string_id!(MovieId);

/// A loaded person. Immutable once the store is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Birth year as given; `None` when the record left it blank.
    pub birth: Option<String>,
    /// Movies this person is credited in.
    pub movies: BTreeSet<MovieId>,
}

/// A loaded movie. Immutable once the store is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: String,
    /// People credited in this movie.
    pub cast: BTreeSet<PersonId>,
}

/// One edge of the co-star graph: `person_id` appears in `movie_id`.
///
/// Ordered by movie first, then person, which fixes the order in which the
/// search expands neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Neighbor {
    pub movie_id: MovieId,
    pub person_id: PersonId,
}
