//! CSV directory loader.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   people.csv   id,name,birth
//!   movies.csv   id,title,year
//!   stars.csv    person_id,movie_id
//! ```
//!
//! Every file is UTF-8 with a header row. Columns are matched by header name,
//! so extra columns are ignored and column order does not matter.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use costar_kernel::dataset::record::{CastRecord, MovieRecord, PersonRecord};
use costar_kernel::dataset::{DatasetError, DatasetStore};

use crate::contract::DatasetRecords;

pub const PEOPLE_FILENAME: &str = "people.csv";
pub const MOVIES_FILENAME: &str = "movies.csv";
pub const STARS_FILENAME: &str = "stars.csv";

/// Error loading a dataset directory.
#[derive(Debug)]
pub enum LoadError {
    /// The dataset directory does not exist or is not a directory.
    MissingDirectory { path: String },
    /// A CSV file could not be opened or a row could not be decoded.
    Csv { file: String, detail: String },
    /// The records decoded but the kernel rejected them.
    Dataset(DatasetError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDirectory { path } => write!(f, "dataset directory not found: {path}"),
            Self::Csv { file, detail } => write!(f, "{file}: {detail}"),
            Self::Dataset(e) => write!(f, "dataset error: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dataset(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DatasetError> for LoadError {
    fn from(e: DatasetError) -> Self {
        Self::Dataset(e)
    }
}

/// Load `people.csv`, `movies.csv` and `stars.csv` from `dir` into a store.
///
/// # Errors
///
/// - [`LoadError::MissingDirectory`] if `dir` is not a directory.
/// - [`LoadError::Csv`] if a file is missing or a row fails to decode.
/// - [`LoadError::Dataset`] if the kernel rejects a record.
pub fn load_dir(dir: &Path) -> Result<DatasetStore, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::MissingDirectory {
            path: dir.display().to_string(),
        });
    }
    let records = DatasetRecords {
        people: read_file(&dir.join(PEOPLE_FILENAME))?,
        movies: read_file(&dir.join(MOVIES_FILENAME))?,
        cast: read_file(&dir.join(STARS_FILENAME))?,
    };
    let store = records.into_store()?;
    log_summary(&dir.display().to_string(), &store);
    Ok(store)
}

/// Load a store from three in-memory CSV readers.
///
/// # Errors
///
/// As [`load_dir`], minus the directory check.
pub fn load_readers<P: Read, M: Read, S: Read>(
    people: P,
    movies: M,
    stars: S,
) -> Result<DatasetStore, LoadError> {
    let records = DatasetRecords {
        people: read_records::<PersonRecord, _>(PEOPLE_FILENAME, people)?,
        movies: read_records::<MovieRecord, _>(MOVIES_FILENAME, movies)?,
        cast: read_records::<CastRecord, _>(STARS_FILENAME, stars)?,
    };
    let store = records.into_store()?;
    log_summary("<readers>", &store);
    Ok(store)
}

fn read_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Csv {
        file: path.display().to_string(),
        detail: format!("open: {e}"),
    })?;
    read_records(&path.display().to_string(), file)
}

fn read_records<T: DeserializeOwned, R: Read>(file: &str, reader: R) -> Result<Vec<T>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    csv_reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|e| LoadError::Csv {
            file: file.to_string(),
            detail: e.to_string(),
        })
}

fn log_summary(origin: &str, store: &DatasetStore) {
    let summary = store.summary();
    tracing::info!(
        origin,
        people = summary.people,
        movies = summary.movies,
        cast_links = summary.cast_links,
        "dataset loaded"
    );
    if summary.skipped_cast_links > 0 {
        tracing::warn!(
            skipped = summary.skipped_cast_links,
            "cast links referencing unknown ids were skipped"
        );
    }
    if summary.replaced_records > 0 {
        tracing::warn!(
            replaced = summary.replaced_records,
            "records with repeated ids replaced earlier ones"
        );
    }
}
