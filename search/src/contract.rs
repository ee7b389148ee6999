//! The graph contract the search walks.

use std::collections::BTreeSet;

use costar_kernel::dataset::{DatasetStore, Neighbor, PersonId};

/// A source of co-star edges.
///
/// # Contract
///
/// - `neighbors` must be deterministic: the same person yields the same set.
/// - Every person id returned by `neighbors` must satisfy `contains_person`.
/// - `neighbors` of an unknown person is empty.
pub trait CostarGraph {
    /// Whether `id` names a person in the graph.
    fn contains_person(&self, id: &PersonId) -> bool;

    /// `(movie, co-star)` pairs for `id`, in ascending order.
    fn neighbors(&self, id: &PersonId) -> BTreeSet<Neighbor>;
}

impl CostarGraph for DatasetStore {
    fn contains_person(&self, id: &PersonId) -> bool {
        DatasetStore::contains_person(self, id)
    }

    fn neighbors(&self, id: &PersonId) -> BTreeSet<Neighbor> {
        DatasetStore::neighbors(self, id).unwrap_or_default()
    }
}
