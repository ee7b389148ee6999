//! Shared helpers for the lock tests.
//!
//! `reference_degrees` is a deliberately naive breadth-first search over a
//! person adjacency map. It shares no code with `costar_search`, so lock
//! tests can compare the engine's path lengths against an independent answer.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use costar_kernel::dataset::record::{CastRecord, MovieRecord, PersonRecord};
use costar_kernel::dataset::{DatasetStore, PersonId};
use costar_search::path::PathStep;

/// Person id for index `i` in generated graphs.
#[must_use]
pub fn person_id(i: usize) -> PersonId {
    PersonId::new(format!("p{i}"))
}

/// Build a store with `people` people and one movie per entry of `movies`,
/// each listing the person indices in its cast. Indices out of range become
/// dangling links, which the loader skips.
///
/// # Panics
///
/// Panics if the store rejects the generated records, which would be a
/// helper bug.
#[must_use]
pub fn store_from_casts(people: usize, movies: &[Vec<usize>]) -> DatasetStore {
    let people_records: Vec<PersonRecord> = (0..people)
        .map(|i| PersonRecord::new(person_id(i).as_str(), &format!("Person {i}"), None))
        .collect();
    let movie_records: Vec<MovieRecord> = (0..movies.len())
        .map(|m| MovieRecord::new(&format!("m{m}"), &format!("Movie {m}"), "2000"))
        .collect();
    let cast_records: Vec<CastRecord> = movies
        .iter()
        .enumerate()
        .flat_map(|(m, cast)| {
            cast.iter()
                .map(move |&p| CastRecord::new(person_id(p).as_str(), &format!("m{m}")))
        })
        .collect();
    DatasetStore::load(people_records, movie_records, cast_records)
        .expect("generated records are well formed")
}

/// Independent shortest-path length between two people, or `None` if they
/// are not connected.
///
/// # Panics
///
/// Panics if the store cannot enumerate a loaded person's neighbors.
#[must_use]
pub fn reference_degrees(
    store: &DatasetStore,
    source: &PersonId,
    target: &PersonId,
) -> Option<usize> {
    let mut adjacency: BTreeMap<PersonId, BTreeSet<PersonId>> = BTreeMap::new();
    for id in store.person_ids() {
        let costars = store
            .neighbors(id)
            .expect("listed person exists")
            .into_iter()
            .map(|n| n.person_id)
            .filter(|p| p != id)
            .collect();
        adjacency.insert(id.clone(), costars);
    }

    let mut distance: BTreeMap<PersonId, usize> = BTreeMap::new();
    let mut queue = VecDeque::new();
    distance.insert(source.clone(), 0);
    queue.push_back(source.clone());
    while let Some(current) = queue.pop_front() {
        let d = distance[&current];
        if current == *target {
            return Some(d);
        }
        for next in adjacency.get(&current).into_iter().flatten() {
            if !distance.contains_key(next) {
                distance.insert(next.clone(), d + 1);
                queue.push_back(next.clone());
            }
        }
    }
    None
}

/// Check that `steps` walks from `source` to `target`, each step's movie
/// crediting both the previous person and the step's person.
#[must_use]
pub fn is_valid_path(
    store: &DatasetStore,
    source: &PersonId,
    target: &PersonId,
    steps: &[PathStep],
) -> bool {
    let mut previous = source;
    for step in steps {
        let Ok(movie) = store.movie(&step.movie_id) else {
            return false;
        };
        if !movie.cast.contains(previous) || !movie.cast.contains(&step.person_id) {
            return false;
        }
        previous = &step.person_id;
    }
    previous == target
}
