//! World contract: a named, self-contained dataset fixture.
//!
//! Worlds provide records only. Loading, searching and rendering are runner
//! concerns; a world never builds a store itself.

use costar_kernel::dataset::record::{CastRecord, MovieRecord, PersonRecord};
use costar_kernel::dataset::{DatasetError, DatasetStore};

/// The three relations, exactly as a loader would hand them to the kernel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetRecords {
    pub people: Vec<PersonRecord>,
    pub movies: Vec<MovieRecord>,
    pub cast: Vec<CastRecord>,
}

impl DatasetRecords {
    /// Load the records into a fresh store.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if any record is malformed or an id repeats.
    pub fn into_store(self) -> Result<DatasetStore, DatasetError> {
        DatasetStore::load(self.people, self.movies, self.cast)
    }
}

/// The contract a fixture world implements.
pub trait DatasetWorld {
    /// Unique world identifier (e.g., `"small_cast"`).
    fn world_id(&self) -> &str;

    /// The records making up this world. Must be the same on every call.
    fn records(&self) -> DatasetRecords;
}
