//! Shared helpers for costar benchmark suites.

use costar_harness::contract::DatasetWorld;
use costar_harness::worlds::synthetic::SyntheticCast;
use costar_kernel::dataset::{DatasetStore, PersonId};

/// A named synthetic dataset plus a fixed query pair.
pub struct Regime {
    pub name: &'static str,
    pub store: DatasetStore,
    pub source: PersonId,
    pub target: PersonId,
}

/// Build a regime from synthetic parameters. Source is the first person and
/// target the last, so queries cross most of the graph.
///
/// # Panics
///
/// Panics if the synthetic records fail to load. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn regime(name: &'static str, world: SyntheticCast) -> Regime {
    let store = world
        .records()
        .into_store()
        .expect("synthetic records load");
    Regime {
        name,
        store,
        source: PersonId::new("p0"),
        target: PersonId::new(format!("p{}", world.people.saturating_sub(1))),
    }
}

/// Sparse chains: few co-stars per movie, long paths or none.
#[must_use]
pub fn regime_sparse() -> Regime {
    regime("sparse", SyntheticCast::new(2_000, 800, 2, 11))
}

/// Typical film-sized casts.
#[must_use]
pub fn regime_typical() -> Regime {
    regime("typical", SyntheticCast::new(5_000, 2_000, 6, 23))
}

/// Large casts: wide frontiers and many suppressed duplicates.
#[must_use]
pub fn regime_dense() -> Regime {
    regime("dense", SyntheticCast::new(5_000, 1_000, 30, 37))
}

/// All macro regimes, smallest first.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![regime_sparse(), regime_typical(), regime_dense()]
}
