//! `ChainAbc`: three people linked by two movies, plus one isolated person.
//!
//! ```text
//! A --M1-- B --M2-- C        D
//! ```

use costar_kernel::dataset::record::{CastRecord, MovieRecord, PersonRecord};

use crate::contract::{DatasetRecords, DatasetWorld};

pub struct ChainAbc;

impl DatasetWorld for ChainAbc {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "chain_abc"
    }

    fn records(&self) -> DatasetRecords {
        DatasetRecords {
            people: vec![
                PersonRecord::new("A", "Person A", Some("1970")),
                PersonRecord::new("B", "Person B", Some("1971")),
                PersonRecord::new("C", "Person C", None),
                PersonRecord::new("D", "Person D", None),
            ],
            movies: vec![
                MovieRecord::new("M1", "Movie One", "2001"),
                MovieRecord::new("M2", "Movie Two", "2002"),
            ],
            cast: vec![
                CastRecord::new("A", "M1"),
                CastRecord::new("B", "M1"),
                CastRecord::new("B", "M2"),
                CastRecord::new("C", "M2"),
            ],
        }
    }
}
