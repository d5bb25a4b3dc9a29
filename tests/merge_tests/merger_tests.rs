//! Tests for Merger
//!
//! These tests verify:
//! - Output content is the first file followed by the second
//! - Missing inputs are reported by name, first input checked first
//! - Output naming is deterministic and distinct from inputs
//! - Inputs are never modified
//! - Invalid names fail before anything is written

use fileops::merge::{merged_name, Merger};
use fileops::storage::UploadStore;
use fileops::FileOpsError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_store_with(files: &[(&str, &[u8])]) -> (TempDir, UploadStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = UploadStore::open(temp_dir.path()).unwrap();
    for (name, contents) in files {
        store.save(name, contents).unwrap();
    }
    (temp_dir, store)
}

// =============================================================================
// Content Tests
// =============================================================================

#[test]
fn test_merge_concatenates_in_order() {
    let (_temp, store) = setup_store_with(&[
        ("a.txt", b"alpha\nbeta\n"),
        ("b.txt", b"gamma\n"),
    ]);

    let merged = Merger::new(&store).merge("a.txt", "b.txt").unwrap();

    assert_eq!(store.read(&merged).unwrap(), b"alpha\nbeta\ngamma\n");
}

#[test]
fn test_merge_order_matters() {
    let (_temp, store) = setup_store_with(&[("a.txt", b"A\n"), ("b.txt", b"B\n")]);
    let merger = Merger::new(&store);

    let ab = merger.merge("a.txt", "b.txt").unwrap();
    let ba = merger.merge("b.txt", "a.txt").unwrap();

    assert_ne!(ab, ba);
    assert_eq!(store.read(&ab).unwrap(), b"A\nB\n");
    assert_eq!(store.read(&ba).unwrap(), b"B\nA\n");
}

#[test]
fn test_merge_terminates_first_files_last_line() {
    let (_temp, store) = setup_store_with(&[("a.txt", b"no newline"), ("b.txt", b"next")]);

    let merged = Merger::new(&store).merge("a.txt", "b.txt").unwrap();

    assert_eq!(store.read(&merged).unwrap(), b"no newline\nnext");
}

#[test]
fn test_merge_empty_first_yields_second() {
    let (_temp, store) = setup_store_with(&[("empty.txt", b""), ("b.txt", b"only b\n")]);

    let merged = Merger::new(&store).merge("empty.txt", "b.txt").unwrap();

    assert_eq!(store.read(&merged).unwrap(), b"only b\n");
}

#[test]
fn test_merge_keeps_duplicate_lines() {
    let (_temp, store) = setup_store_with(&[("a.txt", b"same\n"), ("b.txt", b"same\n")]);

    let merged = Merger::new(&store).merge("a.txt", "b.txt").unwrap();

    assert_eq!(store.read(&merged).unwrap(), b"same\nsame\n");
}

#[test]
fn test_merge_file_with_itself() {
    let (_temp, store) = setup_store_with(&[("a.txt", b"x\n")]);

    let merged = Merger::new(&store).merge("a.txt", "a.txt").unwrap();

    assert_eq!(merged, "a_a_merged.txt");
    assert_eq!(store.read(&merged).unwrap(), b"x\nx\n");
}

// =============================================================================
// Naming Tests
// =============================================================================

#[test]
fn test_merged_name_exists_and_is_distinct() {
    let (_temp, store) = setup_store_with(&[("a.txt", b"1\n"), ("b.txt", b"2\n")]);

    let merged = Merger::new(&store).merge("a.txt", "b.txt").unwrap();

    assert_eq!(merged, "a_b_merged.txt");
    assert_eq!(merged, merged_name("a.txt", "b.txt").unwrap());
    assert_ne!(merged, "a.txt");
    assert_ne!(merged, "b.txt");
    assert!(store.exists(&merged).unwrap());
}

#[test]
fn test_repeated_merge_overwrites_same_output() {
    let (_temp, store) = setup_store_with(&[("a.txt", b"v1\n"), ("b.txt", b"b\n")]);
    let merger = Merger::new(&store);

    let first = merger.merge("a.txt", "b.txt").unwrap();
    store.save("a.txt", b"v2\n").unwrap();
    let second = merger.merge("a.txt", "b.txt").unwrap();

    assert_eq!(first, second);
    assert_eq!(store.read(&second).unwrap(), b"v2\nb\n");
    assert_eq!(store.list().unwrap().len(), 3);
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_merge_missing_second_names_it() {
    let (_temp, store) = setup_store_with(&[("a.txt", b"a\n")]);

    match Merger::new(&store).merge("a.txt", "missing.txt") {
        Err(FileOpsError::FileNotFound(name)) => assert_eq!(name, "missing.txt"),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_merge_missing_first_names_it() {
    let (_temp, store) = setup_store_with(&[("b.txt", b"b\n")]);

    match Merger::new(&store).merge("missing.txt", "b.txt") {
        Err(FileOpsError::FileNotFound(name)) => assert_eq!(name, "missing.txt"),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_merge_both_missing_reports_first() {
    let (_temp, store) = setup_store_with(&[]);

    match Merger::new(&store).merge("one.txt", "two.txt") {
        Err(FileOpsError::FileNotFound(name)) => assert_eq!(name, "one.txt"),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_failed_merge_writes_nothing() {
    let (_temp, store) = setup_store_with(&[("a.txt", b"a\n")]);

    let _ = Merger::new(&store).merge("a.txt", "missing.txt");

    assert_eq!(store.list().unwrap(), vec!["a.txt"]);
}

#[test]
fn test_merge_rejects_traversal() {
    let (_temp, store) = setup_store_with(&[("a.txt", b"a\n")]);

    let result = Merger::new(&store).merge("a.txt", "../../etc/passwd");

    assert!(matches!(result, Err(FileOpsError::InvalidName(_))));
    assert_eq!(store.list().unwrap(), vec!["a.txt"]);
}

#[test]
fn test_merge_leaves_inputs_untouched() {
    let (_temp, store) = setup_store_with(&[("a.txt", b"a"), ("b.txt", b"b")]);

    Merger::new(&store).merge("a.txt", "b.txt").unwrap();

    assert_eq!(store.read("a.txt").unwrap(), b"a");
    assert_eq!(store.read("b.txt").unwrap(), b"b");
}
