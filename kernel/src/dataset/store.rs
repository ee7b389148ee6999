//! `DatasetStore`: the loaded people, movies and name index.
//!
//! Built once by [`DatasetStore::load`] and read-only afterwards. Searches
//! borrow the store; nothing in it is mutated after construction, so one
//! store can back any number of concurrent searches.

use std::collections::{BTreeSet, HashMap};

use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_DATASET};

use super::error::{DatasetError, RecordKind};
use super::record::{CastRecord, MovieRecord, PersonRecord};
use super::{Movie, MovieId, Neighbor, Person, PersonId};

/// Counts recorded while loading.
///
/// `skipped_cast_links` counts cast records that referenced an unknown person
/// or movie id. Those are dropped, not rejected. `replaced_records` counts
/// person or movie records overwritten by a later record with the same id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub people: usize,
    pub movies: usize,
    pub cast_links: usize,
    pub skipped_cast_links: usize,
    pub replaced_records: usize,
}

/// In-memory dataset: people by id, movies by id, person ids by lowercased name.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
    summary: LoadSummary,
}

impl DatasetStore {
    /// Build a store from the three relations.
    ///
    /// People and movies are loaded first; cast links are then joined against
    /// them, filling both `Person::movies` and `Movie::cast` so the relation is
    /// symmetric. A cast link naming an unknown person or movie is skipped.
    /// When two people (or two movies) share an id, the later record wins.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidInput`] if any record has a blank
    /// required field. The load is aborted; nothing partially built escapes.
    pub fn load<P, M, C>(people: P, movies: M, cast: C) -> Result<Self, DatasetError>
    where
        P: IntoIterator<Item = PersonRecord>,
        M: IntoIterator<Item = MovieRecord>,
        C: IntoIterator<Item = CastRecord>,
    {
        let mut store = Self::default();

        for (index, record) in people.into_iter().enumerate() {
            record.validate(index)?;
            let id = PersonId::new(record.id);
            if let Some(stale) = store.people.get(&id) {
                let key = stale.name.to_lowercase();
                if let Some(ids) = store.names.get_mut(&key) {
                    ids.remove(&id);
                    if ids.is_empty() {
                        store.names.remove(&key);
                    }
                }
                store.summary.replaced_records += 1;
            }
            store
                .names
                .entry(record.name.to_lowercase())
                .or_default()
                .insert(id.clone());
            let birth = record.birth.filter(|b| !b.trim().is_empty());
            store.people.insert(
                id.clone(),
                Person {
                    id,
                    name: record.name,
                    birth,
                    movies: BTreeSet::new(),
                },
            );
        }

        for (index, record) in movies.into_iter().enumerate() {
            record.validate(index)?;
            let id = MovieId::new(record.id);
            if store.movies.contains_key(&id) {
                store.summary.replaced_records += 1;
            }
            store.movies.insert(
                id.clone(),
                Movie {
                    id,
                    title: record.title,
                    year: record.year,
                    cast: BTreeSet::new(),
                },
            );
        }

        for (index, record) in cast.into_iter().enumerate() {
            record.validate(index)?;
            let person_id = PersonId::new(record.person_id);
            let movie_id = MovieId::new(record.movie_id);
            let (Some(person), Some(movie)) = (
                store.people.get_mut(&person_id),
                store.movies.get_mut(&movie_id),
            ) else {
                store.summary.skipped_cast_links += 1;
                continue;
            };
            person.movies.insert(movie_id);
            if movie.cast.insert(person_id) {
                store.summary.cast_links += 1;
            }
        }

        store.summary.people = store.people.len();
        store.summary.movies = store.movies.len();
        Ok(store)
    }

    /// Look up a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] if no person has this id.
    pub fn person(&self, id: &PersonId) -> Result<&Person, DatasetError> {
        self.people.get(id).ok_or_else(|| DatasetError::NotFound {
            kind: RecordKind::Person,
            id: id.to_string(),
        })
    }

    /// Look up a movie by id.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] if no movie has this id.
    pub fn movie(&self, id: &MovieId) -> Result<&Movie, DatasetError> {
        self.movies.get(id).ok_or_else(|| DatasetError::NotFound {
            kind: RecordKind::Movie,
            id: id.to_string(),
        })
    }

    #[must_use]
    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    /// All person ids whose name matches `name`, ignoring case.
    ///
    /// Empty when nobody matches; more than one id when the name is shared.
    /// Picking among several is the caller's job.
    #[must_use]
    pub fn person_ids_for_name(&self, name: &str) -> BTreeSet<PersonId> {
        self.names
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Every `(movie, co-star)` pair reachable from `id` through a shared credit.
    ///
    /// The person themself appears once per movie they are in; filtering that
    /// out is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] if `id` is not a loaded person.
    pub fn neighbors(&self, id: &PersonId) -> Result<BTreeSet<Neighbor>, DatasetError> {
        let person = self.person(id)?;
        let mut out = BTreeSet::new();
        for movie_id in &person.movies {
            // Person::movies only ever holds ids that were joined against a movie.
            let Some(movie) = self.movies.get(movie_id) else {
                continue;
            };
            for costar in &movie.cast {
                out.insert(Neighbor {
                    movie_id: movie_id.clone(),
                    person_id: costar.clone(),
                });
            }
        }
        Ok(out)
    }

    #[must_use]
    pub fn summary(&self) -> LoadSummary {
        self.summary
    }

    #[must_use]
    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Person ids in ascending order.
    #[must_use]
    pub fn person_ids(&self) -> Vec<&PersonId> {
        let mut ids: Vec<&PersonId> = self.people.keys().collect();
        ids.sort();
        ids
    }

    /// Content digest of the loaded dataset.
    ///
    /// Computed over canonical JSON of people and movies sorted by id, so two
    /// stores loaded from the same records in any order share a digest.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let mut movie_ids: Vec<&MovieId> = self.movies.keys().collect();
        movie_ids.sort();

        let people: Vec<serde_json::Value> = self
            .person_ids()
            .into_iter()
            .map(|id| {
                let p = &self.people[id];
                serde_json::json!({
                    "birth": p.birth,
                    "id": p.id.as_str(),
                    "movies": p.movies.iter().map(MovieId::as_str).collect::<Vec<_>>(),
                    "name": p.name,
                })
            })
            .collect();
        let movies: Vec<serde_json::Value> = movie_ids
            .into_iter()
            .map(|id| {
                let m = &self.movies[id];
                serde_json::json!({
                    "cast": m.cast.iter().map(PersonId::as_str).collect::<Vec<_>>(),
                    "id": m.id.as_str(),
                    "title": m.title,
                    "year": m.year,
                })
            })
            .collect();

        let bytes = canonical_json_bytes(&serde_json::json!({
            "movies": movies,
            "people": people,
        }))?;
        Ok(canonical_hash(DOMAIN_DATASET, &bytes))
    }
}
