//! Input records for the three relations.
//!
//! Field names match the CSV headers (`people.csv`, `movies.csv`,
//! `stars.csv`), so the records deserialize straight from a reader.

use serde::Deserialize;

use super::error::{DatasetError, RecordKind};

/// One row of `people.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub birth: Option<String>,
}

/// One row of `movies.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
}

/// One row of `stars.csv`: a person credited in a movie.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CastRecord {
    pub person_id: String,
    pub movie_id: String,
}

impl PersonRecord {
    #[must_use]
    pub fn new(id: &str, name: &str, birth: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            birth: birth.map(str::to_string),
        }
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), DatasetError> {
        require(RecordKind::Person, index, "id", &self.id)?;
        require(RecordKind::Person, index, "name", &self.name)
    }
}

impl MovieRecord {
    #[must_use]
    pub fn new(id: &str, title: &str, year: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            year: year.to_string(),
        }
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), DatasetError> {
        require(RecordKind::Movie, index, "id", &self.id)?;
        require(RecordKind::Movie, index, "title", &self.title)
    }
}

impl CastRecord {
    #[must_use]
    pub fn new(person_id: &str, movie_id: &str) -> Self {
        Self {
            person_id: person_id.to_string(),
            movie_id: movie_id.to_string(),
        }
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), DatasetError> {
        require(RecordKind::Cast, index, "person_id", &self.person_id)?;
        require(RecordKind::Cast, index, "movie_id", &self.movie_id)
    }
}

fn require(kind: RecordKind, index: usize, field: &str, value: &str) -> Result<(), DatasetError> {
    if value.trim().is_empty() {
        return Err(DatasetError::InvalidInput {
            kind,
            index,
            detail: format!("missing required field `{field}`"),
        });
    }
    Ok(())
}
