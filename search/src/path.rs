//! Path steps and their human-readable form.

use costar_kernel::dataset::{DatasetStore, MovieId, PersonId};

use crate::error::SearchError;

/// One hop of a found path: the movie shared with the previous person, and
/// the person reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathStep {
    pub movie_id: MovieId,
    pub person_id: PersonId,
}

impl PathStep {
    #[must_use]
    pub fn new(movie_id: impl Into<MovieId>, person_id: impl Into<PersonId>) -> Self {
        Self {
            movie_id: movie_id.into(),
            person_id: person_id.into(),
        }
    }
}

/// A named hop: `person_a` and `person_b` starred in `movie_title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub person_a: String,
    pub person_b: String,
    pub movie_title: String,
}

/// Turn the steps of a path starting at `source` into named connections.
///
/// The first connection links `source` with the first step's person; each
/// later connection links consecutive step people. An empty path yields no
/// connections.
///
/// # Errors
///
/// Returns [`SearchError::Dataset`] if any id on the path is missing from
/// `store`. A path produced by a search over the same store never triggers it.
pub fn format_path(
    store: &DatasetStore,
    source: &PersonId,
    steps: &[PathStep],
) -> Result<Vec<Connection>, SearchError> {
    let mut previous = &store.person(source)?.name;
    let mut connections = Vec::with_capacity(steps.len());
    for step in steps {
        let person = store.person(&step.person_id)?;
        let movie = store.movie(&step.movie_id)?;
        connections.push(Connection {
            person_a: previous.clone(),
            person_b: person.name.clone(),
            movie_title: movie.title.clone(),
        });
        previous = &person.name;
    }
    Ok(connections)
}
