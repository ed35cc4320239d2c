#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
use std::fs;
use tempfile::TempDir;

use swish_core::{RECORD_LEN, Session, StateRecord, StatsStore};
use swish_models::{Category, CategoryStats, CategoryTable, TableKind};

#[test]
fn test_first_run_starts_from_zero() {
    let temp_dir = TempDir::new().unwrap();
    let store = StatsStore::new(temp_dir.path().join(".config").join("swish.cfg"));

    let session = Session::new(store.load_or_default());

    assert_eq!(*session.snapshot(TableKind::AllTime), CategoryTable::new());
}

#[test]
fn test_all_time_survives_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let state = temp_dir.path().join("swish.cfg");
    let target = temp_dir.path().join("target");

    let mut expected = CategoryStats::default();
    for run in 1..=3_usize {
        fs::create_dir_all(target.join("sub")).unwrap();
        fs::write(target.join("sub").join("f"), vec![0u8; run * 100]).unwrap();

        let store = StatsStore::new(&state);
        let mut session = Session::new(store.load_or_default());
        expected += session.clean_category(Category::ShortTermTemp, &target);
        store.save(&session.record()).unwrap();
    }

    let loaded = StatsStore::new(&state).load().unwrap();
    assert_eq!(expected, CategoryStats::new(600, 3, 3));
    assert_eq!(loaded.all_time[Category::ShortTermTemp], expected);
    assert!(loaded.all_time[Category::UserCache].is_zero());
}

#[test]
fn test_corrupt_state_is_treated_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let state = temp_dir.path().join("swish.cfg");
    fs::write(&state, b"not a statistics record").unwrap();

    let store = StatsStore::new(&state);
    assert_eq!(store.load(), None);

    // the next save replaces it with a well-formed record
    store.save(&StateRecord::default()).unwrap();
    assert_eq!(fs::read(&state).unwrap().len(), RECORD_LEN);
    assert_eq!(store.load(), Some(StateRecord::default()));
}
