//! Property tests: the engine against an independent reference search on
//! random cast lists.

use costar_kernel::dataset::{DatasetStore, PersonId};
use costar_search::policy::{SearchPolicy, TargetCheck};
use costar_search::search::{shortest_path, SearchOutcome, SearchResult};
use lock_tests::{is_valid_path, person_id, reference_degrees, store_from_casts};
use proptest::prelude::*;

const MAX_PEOPLE: usize = 12;

/// A generated dataset plus one source/target pair inside it.
#[derive(Debug, Clone)]
struct Case {
    people: usize,
    movies: Vec<Vec<usize>>,
    source: usize,
    target: usize,
}

impl Case {
    fn store(&self) -> DatasetStore {
        store_from_casts(self.people, &self.movies)
    }

    fn endpoints(&self) -> (PersonId, PersonId) {
        (person_id(self.source), person_id(self.target))
    }

    fn search(&self, store: &DatasetStore, policy: &SearchPolicy) -> SearchResult {
        let (source, target) = self.endpoints();
        shortest_path(store, &source, &target, policy).unwrap()
    }
}

/// Up to eight movies, each with a cast of one to four person indices.
/// Indices may exceed the person count and become dangling links.
fn case() -> impl Strategy<Value = Case> {
    (1..=MAX_PEOPLE).prop_flat_map(|people| {
        let cast = prop::collection::vec(0..people + 1, 1..=4);
        (
            prop::collection::vec(cast, 0..=8),
            0..people,
            0..people,
        )
            .prop_map(move |(movies, source, target)| Case {
                people,
                movies,
                source,
                target,
            })
    })
}

fn legacy() -> SearchPolicy {
    SearchPolicy {
        target_check: TargetCheck::OnDiscovery,
        ..SearchPolicy::default()
    }
}

proptest! {
    #[test]
    fn length_matches_reference(case in case()) {
        let store = case.store();
        let (source, target) = case.endpoints();

        let result = case.search(&store, &SearchPolicy::default());
        prop_assert_eq!(result.degrees(), reference_degrees(&store, &source, &target));
        if let Some(steps) = result.path() {
            prop_assert!(is_valid_path(&store, &source, &target, steps));
        }
    }

    #[test]
    fn connectivity_is_symmetric(case in case()) {
        let store = case.store();
        let reversed = Case {
            source: case.target,
            target: case.source,
            ..case.clone()
        };

        let forward = case.search(&store, &SearchPolicy::default());
        let backward = reversed.search(&store, &SearchPolicy::default());
        prop_assert_eq!(forward.degrees(), backward.degrees());
    }

    #[test]
    fn repeated_searches_are_identical(case in case()) {
        let store = case.store();

        let first = case.search(&store, &SearchPolicy::default());
        let second = case.search(&store, &SearchPolicy::default());
        prop_assert_eq!(&first.outcome, &second.outcome);
        prop_assert_eq!(first.report.digest().unwrap(), second.report.digest().unwrap());
    }

    #[test]
    fn target_check_modes_agree_on_path(case in case()) {
        let store = case.store();

        let dequeue = case.search(&store, &SearchPolicy::default());
        let discovery = case.search(&store, &legacy());
        prop_assert_eq!(dequeue.outcome, discovery.outcome);
    }

    #[test]
    fn budget_never_changes_a_found_path(case in case(), budget in 1u64..6) {
        let store = case.store();
        let bounded = SearchPolicy {
            max_expansions: Some(budget),
            ..SearchPolicy::default()
        };

        let free = case.search(&store, &SearchPolicy::default());
        let capped = case.search(&store, &bounded);
        prop_assert!(capped.report.total_expansions <= budget);
        match capped.outcome {
            SearchOutcome::BudgetExceeded => {}
            other => prop_assert_eq!(other, free.outcome),
        }
    }
}
