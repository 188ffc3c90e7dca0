//! Tests for manifest directory enumeration.

use std::fs;

use super::*;

#[test]
fn test_read_dir_sorted_by_file_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b-service.yaml"), "kind: Service\n").unwrap();
    fs::write(dir.path().join("a-role.yaml"), "kind: Role\n").unwrap();
    fs::write(dir.path().join("c-pod.yaml"), "kind: Pod\n").unwrap();

    let batch = read_manifest_dir(dir.path()).unwrap();

    let sources: Vec<&str> = batch.iter().map(|d| d.source.as_str()).collect();
    assert_eq!(sources, vec!["a-role.yaml", "b-service.yaml", "c-pod.yaml"]);
    assert_eq!(batch[0].bytes, b"kind: Role\n");
}

#[test]
fn test_read_dir_skips_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.yaml"), "kind: Role\n").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("two.yaml"), "kind: Role\n").unwrap();

    let batch = read_manifest_dir(dir.path()).unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].source, "one.yaml");
}

#[test]
fn test_empty_directory_yields_empty_batch() {
    let dir = tempfile::tempdir().unwrap();
    let batch = read_manifest_dir(dir.path()).unwrap();
    assert!(batch.is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let err = read_manifest_dir(&missing).unwrap_err();
    assert!(matches!(err, BatchError::ReadDir { .. }));
    assert!(err.to_string().contains("does-not-exist"));
}
