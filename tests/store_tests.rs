/// Table store integration tests — source builds, cache files, and failures.

use perilous_gen::core::store::{StoreError, TableSet, TableStore};
use perilous_gen::schema::spell::SpellCategory;
use std::path::Path;
use tempfile::TempDir;

/// A scratch tables directory seeded with the named fixtures.
fn scratch_dir(fixtures: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in fixtures {
        let from = Path::new("tests/fixtures").join(format!("{}.txt", name));
        std::fs::copy(&from, dir.path().join(format!("{}.txt", name))).unwrap();
    }
    dir
}

#[test]
fn load_builds_and_writes_cache_when_absent() {
    let dir = scratch_dir(&["Spells"]);
    let store = TableStore::new(dir.path());
    assert!(!store.cache_path("Spells").exists());

    let tables: TableSet<SpellCategory> = store.load("Spells").unwrap();
    assert!(store.cache_path("Spells").exists());

    let forms = tables.get(SpellCategory::Form).unwrap();
    assert_eq!(forms.entries(), &["Bolt", "Ward", "Ray", "Lance"]);
    assert_eq!(forms.weights(), &[1, 4, 1, 4]);
}

#[test]
fn load_after_build_matches_direct_parse() {
    let dir = scratch_dir(&["Spells"]);
    let store = TableStore::new(dir.path());

    let built: TableSet<SpellCategory> = store.build("Spells").unwrap();
    let loaded: TableSet<SpellCategory> = store.load("Spells").unwrap();
    let text = std::fs::read_to_string(dir.path().join("Spells.txt")).unwrap();
    let parsed: TableSet<SpellCategory> = TableStore::parse(&text).unwrap();

    assert_eq!(built, parsed);
    assert_eq!(loaded, parsed);
}

#[test]
fn cache_is_read_without_the_source() {
    let dir = scratch_dir(&["Spells"]);
    let store = TableStore::new(dir.path());
    let built: TableSet<SpellCategory> = store.build("Spells").unwrap();

    std::fs::remove_file(store.source_path("Spells")).unwrap();
    let loaded: TableSet<SpellCategory> = store.load("Spells").unwrap();
    assert_eq!(loaded, built);
}

#[test]
fn repeated_builds_are_byte_identical() {
    let dir = scratch_dir(&["Spells"]);
    let store = TableStore::new(dir.path());

    store.build::<SpellCategory>("Spells").unwrap();
    let first = std::fs::read(store.cache_path("Spells")).unwrap();
    store.rebuild::<SpellCategory>("Spells").unwrap();
    let second = std::fs::read(store.cache_path("Spells")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn corrupt_cache_is_not_rebuilt() {
    let dir = scratch_dir(&["Spells"]);
    let store = TableStore::new(dir.path());
    std::fs::write(store.cache_path("Spells"), "{ 1: (entries: [\"Bolt\"], weights: [1, 2]) }").unwrap();

    let result = store.load::<SpellCategory>("Spells");
    assert!(matches!(result, Err(StoreError::CacheFormat(_))));

    // The bad cache is left alone for someone to look at.
    let contents = std::fs::read_to_string(store.cache_path("Spells")).unwrap();
    assert!(contents.contains("weights: [1, 2]"));
}

#[test]
fn rebuild_repairs_a_corrupt_cache() {
    let dir = scratch_dir(&["Spells"]);
    let store = TableStore::new(dir.path());
    std::fs::write(store.cache_path("Spells"), "garbage").unwrap();

    let rebuilt: TableSet<SpellCategory> = store.rebuild("Spells").unwrap();
    let loaded: TableSet<SpellCategory> = store.load("Spells").unwrap();
    assert_eq!(loaded, rebuilt);
}

#[test]
fn missing_source_names_the_path() {
    let dir = scratch_dir(&[]);
    let store = TableStore::new(dir.path());

    match store.load::<SpellCategory>("Spells") {
        Err(StoreError::SourceNotFound { path }) => {
            assert_eq!(path, dir.path().join("Spells.txt"));
        }
        other => panic!("expected SourceNotFound, got {:?}", other),
    }
}

#[test]
fn malformed_roll_aborts_build() {
    let dir = scratch_dir(&["BadRoll"]);
    let store = TableStore::new(dir.path());

    match store.load::<SpellCategory>("BadRoll") {
        Err(StoreError::Parse { line, content, .. }) => {
            assert_eq!(line, 2);
            assert!(content.starts_with("three"));
        }
        other => panic!("expected Parse, got {:?}", other),
    }
    assert!(!store.cache_path("BadRoll").exists());
}

#[test]
fn short_line_aborts_build() {
    let dir = scratch_dir(&["ShortLine"]);
    let store = TableStore::new(dir.path());

    let result = store.load::<SpellCategory>("ShortLine");
    assert!(matches!(
        result,
        Err(StoreError::ColumnMismatch {
            line: 2,
            expected: 5,
            found: 3
        })
    ));
}

#[test]
fn uncached_store_never_writes() {
    let dir = scratch_dir(&["Spells"]);
    let store = TableStore::new(dir.path()).without_cache();

    let tables: TableSet<SpellCategory> = store.load("Spells").unwrap();
    assert!(tables.first_missing().is_none());
    assert!(!store.cache_path("Spells").exists());
}
