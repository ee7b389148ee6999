//! CSV directories written to a temp dir, loaded and queried end to end.

use std::path::Path;

use costar_harness::loader::{load_dir, MOVIES_FILENAME, PEOPLE_FILENAME, STARS_FILENAME};
use costar_harness::runner::{render_json, run_degrees};
use costar_kernel::dataset::PersonId;
use costar_search::path::PathStep;
use costar_search::policy::SearchPolicy;
use costar_search::search::{shortest_path, SearchOutcome};
use lock_tests::is_valid_path;

fn write_dataset(dir: &Path, people: &str, movies: &str, stars: &str) {
    std::fs::write(dir.join(PEOPLE_FILENAME), people).unwrap();
    std::fs::write(dir.join(MOVIES_FILENAME), movies).unwrap();
    std::fs::write(dir.join(STARS_FILENAME), stars).unwrap();
}

const PEOPLE: &str = "id,name,birth\n\
    1,Alice,1970\n\
    2,Bob,1971\n\
    3,Carol,\n\
    4,Dave,1980\n";
const MOVIES: &str = "id,title,year\n\
    10,First Movie,2001\n\
    20,Second Movie,2002\n";
const STARS: &str = "person_id,movie_id\n\
    1,10\n\
    2,10\n\
    2,20\n\
    3,20\n\
    9,20\n";

#[test]
fn loaded_directory_finds_chain() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), PEOPLE, MOVIES, STARS);

    let store = load_dir(dir.path()).unwrap();
    assert_eq!(store.summary().skipped_cast_links, 1);

    let (source, target) = (PersonId::new("1"), PersonId::new("3"));
    let result = shortest_path(&store, &source, &target, &SearchPolicy::default()).unwrap();
    let steps = result.path().unwrap();
    assert_eq!(steps, &[PathStep::new("10", "2"), PathStep::new("20", "3")]);
    assert!(is_valid_path(&store, &source, &target, steps));

    let isolated = shortest_path(&store, &source, &"4".into(), &SearchPolicy::default()).unwrap();
    assert_eq!(isolated.outcome, SearchOutcome::NotConnected);
}

#[test]
fn json_output_names_every_step() {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), PEOPLE, MOVIES, STARS);
    let store = load_dir(dir.path()).unwrap();

    let run = run_degrees(&store, &"1".into(), &"3".into(), &SearchPolicy::default()).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&render_json(&run).unwrap()).unwrap();
    assert_eq!(v["degrees"], 2);
    assert_eq!(v["path"][0]["person_name"], "Bob");
    assert_eq!(v["path"][1]["person_name"], "Carol");
    assert_eq!(v["path"][1]["movie_title"], "Second Movie");
    assert_eq!(v["dataset_digest"], store.digest().unwrap().as_str());
}

#[test]
fn repeated_ids_in_files_keep_the_later_row() {
    let dir = tempfile::tempdir().unwrap();
    let people = "id,name,birth\n1,Alice,1970\n2,Bob,1971\n2,Robert,1971\n";
    let movies = "id,title,year\n10,Working Title,2000\n10,First Movie,2001\n";
    let stars = "person_id,movie_id\n1,10\n2,10\n";
    write_dataset(dir.path(), people, movies, stars);

    let store = load_dir(dir.path()).unwrap();
    assert_eq!(store.summary().replaced_records, 2);
    assert_eq!(store.person(&"2".into()).unwrap().name, "Robert");
    assert!(store.person_ids_for_name("bob").is_empty());

    let run = run_degrees(&store, &"1".into(), &"2".into(), &SearchPolicy::default()).unwrap();
    assert_eq!(run.connections[0].movie_title, "First Movie");
    assert_eq!(run.connections[0].person_b, "Robert");
}
