#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use swish_core::PathCleaner;
use swish_models::CategoryStats;

/// Create a test file of exactly `size` bytes
fn create_test_file(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; size]).unwrap();
}

/// Something shaped like a user cache directory
fn setup_cache_tree(root: &Path) -> u64 {
    let files = [
        ("fontconfig/CACHEDIR.TAG", 43),
        ("fontconfig/abc-le64.cache-9", 4096),
        ("mozilla/firefox/profile/cache2/entries/01AB", 15_000),
        ("mozilla/firefox/profile/cache2/entries/02CD", 700),
        ("mozilla/firefox/profile/cache2/index", 256),
        ("pip/http/a/b/c/d/e/blob", 123_456),
        ("thumbnails/normal/x.png", 2048),
        (".hidden/state", 1),
    ];
    for (name, size) in files {
        create_test_file(&root.join(name), size);
    }
    fs::create_dir_all(root.join("empty/nested/deeper")).unwrap();

    files.iter().map(|(_, size)| *size as u64).sum()
}

#[test]
fn test_clean_empties_realistic_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("cache");
    let total = setup_cache_tree(&root);

    let delta = PathCleaner::new().clean(&root);

    // fontconfig, mozilla/firefox/profile/cache2/entries (5), pip/http/a/b/c/d/e (7),
    // thumbnails/normal (2), .hidden, empty/nested/deeper (3)
    assert_eq!(delta, CategoryStats::new(total, 8, 19));
    assert!(root.is_dir());
    assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
}

#[test]
fn test_clean_is_exhausted_after_first_pass() {
    let temp_dir = TempDir::new().unwrap();
    setup_cache_tree(temp_dir.path());

    let cleaner = PathCleaner::new();
    let first = cleaner.clean(temp_dir.path());
    let second = cleaner.clean(temp_dir.path());

    assert!(!first.is_zero());
    assert!(second.is_zero());
}

#[test]
fn test_scenario_two_files_one_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("x");
    create_test_file(&root.join("file"), 2000);
    create_test_file(&root.join("dir").join("file"), 10);

    let delta = PathCleaner::new().clean(&root);

    assert_eq!(delta.bytes_freed, 2010);
    assert_eq!(delta.files_deleted, 2);
    assert_eq!(delta.dirs_removed, 1);
    assert!(root.exists());
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let temp_dir = TempDir::new().unwrap();
    let mut path = temp_dir.path().to_path_buf();
    for _ in 0..200 {
        path.push("d");
    }
    create_test_file(&path.join("leaf"), 1);

    let delta = PathCleaner::new().clean(temp_dir.path());

    assert_eq!(delta, CategoryStats::new(1, 1, 200));
}
