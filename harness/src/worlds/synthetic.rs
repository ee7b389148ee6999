//! `SyntheticCast`: a seeded, reproducible random cast graph.
//!
//! Each movie draws `cast_size` people uniformly (with replacement, so a
//! movie may list fewer distinct people). Used for scale tests and
//! benchmarks; the same parameters always yield the same records.

use costar_kernel::dataset::record::{CastRecord, MovieRecord, PersonRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::contract::{DatasetRecords, DatasetWorld};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticCast {
    pub people: usize,
    pub movies: usize,
    pub cast_size: usize,
    pub seed: u64,
}

impl SyntheticCast {
    #[must_use]
    pub fn new(people: usize, movies: usize, cast_size: usize, seed: u64) -> Self {
        Self {
            people,
            movies,
            cast_size,
            seed,
        }
    }
}

impl DatasetWorld for SyntheticCast {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "synthetic_cast"
    }

    fn records(&self) -> DatasetRecords {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let people = (0..self.people)
            .map(|i| PersonRecord::new(&format!("p{i}"), &format!("Person {i}"), None))
            .collect();
        let movies = (0..self.movies)
            .map(|j| MovieRecord::new(&format!("m{j}"), &format!("Movie {j}"), "2000"))
            .collect();
        let mut cast = Vec::with_capacity(self.movies * self.cast_size);
        if self.people > 0 {
            for j in 0..self.movies {
                for _ in 0..self.cast_size {
                    let person = rng.random_range(0..self.people);
                    cast.push(CastRecord::new(&format!("p{person}"), &format!("m{j}")));
                }
            }
        }
        DatasetRecords {
            people,
            movies,
            cast,
        }
    }
}
