//! Cross-process determinism for degrees queries.
//!
//! Spawns the `path_fixture` binary under several environment variants and
//! asserts all produce identical output, and that the output agrees with the
//! same queries run in-process.

use std::path::Path;
use std::process::Command;

use costar_harness::contract::DatasetWorld;
use costar_harness::worlds::small_cast::SmallCast;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("path_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("COSTAR_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "path_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn value<'a>(output: &'a str, key: &str) -> &'a str {
    output
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
        .unwrap_or_else(|| panic!("missing key {key} in:\n{output}"))
}

#[test]
fn crossproc_output_is_identical_across_env_variants() {
    let root = workspace_root();
    let tmp = std::env::temp_dir().to_string_lossy().to_string();

    let baseline = run_variant(&root, &[]);
    let variants = [
        run_variant(&root, &[("LC_ALL", "C")]),
        run_variant(&root, &[("LANG", "en_US.UTF-8"), ("TZ", "Pacific/Auckland")]),
        run_variant(&tmp, &[]),
        run_variant(&root, &[("COSTAR_LOG", "debug")]),
    ];
    for (i, v) in variants.iter().enumerate() {
        assert_eq!(&baseline, v, "variant {i} differs from baseline");
    }
}

#[test]
fn crossproc_output_has_expected_answers() {
    let out = run_variant(&workspace_root(), &[]);

    assert!(value(&out, "dataset_digest").starts_with("sha256:"));
    assert!(value(&out, "policy_digest").starts_with("sha256:"));
    assert_eq!(value(&out, "bacon_hanks.degrees"), "1");
    assert_eq!(value(&out, "elwes_hanks.degrees"), "2");
    assert_eq!(value(&out, "cruise_field.degrees"), "3");
    assert_eq!(value(&out, "bacon_watson.degrees"), "none");
    for label in ["bacon_hanks", "elwes_hanks", "cruise_field", "bacon_watson"] {
        assert_eq!(value(&out, &format!("{label}.legacy_path_matches")), "true");
    }
}

#[test]
fn crossproc_dataset_digest_matches_inproc() {
    let out = run_variant(&workspace_root(), &[]);
    let store = SmallCast.records().into_store().unwrap();
    assert_eq!(value(&out, "dataset_digest"), store.digest().unwrap().as_str());
}
