//! Binary that runs fixed queries over `SmallCast` and prints deterministic
//! key=value lines for cross-process verification.
//!
//! Usage: `path_fixture`

use costar_harness::contract::DatasetWorld;
use costar_harness::runner::run_degrees;
use costar_harness::worlds::small_cast::SmallCast;
use costar_search::policy::{SearchPolicy, TargetCheck};

const QUERIES: &[(&str, &str, &str)] = &[
    ("bacon_hanks", "102", "158"),
    ("elwes_hanks", "144", "158"),
    ("cruise_field", "129", "398"),
    ("bacon_watson", "102", "914612"),
];

fn main() {
    let store = SmallCast
        .records()
        .into_store()
        .expect("SmallCast loads");
    let policy = SearchPolicy::default();
    let legacy = SearchPolicy {
        target_check: TargetCheck::OnDiscovery,
        ..SearchPolicy::default()
    };

    println!(
        "dataset_digest={}",
        store.digest().expect("dataset digest").as_str()
    );
    println!("policy_digest={}", policy.digest().expect("policy digest").as_str());

    for &(label, source, target) in QUERIES {
        let run = run_degrees(&store, &source.into(), &target.into(), &policy)
            .expect("query runs");
        let degrees = run
            .degrees()
            .map_or_else(|| "none".to_string(), |d| d.to_string());
        println!("{label}.degrees={degrees}");
        println!("{label}.report_digest={}", run.report_digest.as_str());
        println!(
            "{label}.total_expansions={}",
            run.result.report.total_expansions
        );

        let legacy_run = run_degrees(&store, &source.into(), &target.into(), &legacy)
            .expect("legacy query runs");
        println!(
            "{label}.legacy_path_matches={}",
            legacy_run.result.path() == run.result.path()
        );
    }
}
