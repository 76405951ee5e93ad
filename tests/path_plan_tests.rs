// Tests for output path planning and collision probing.

use std::fs;
use streamrec::{resolve_output_path, PlanError};
use tempfile::TempDir;

#[test]
fn test_resolves_base_candidate_and_creates_directories() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("recordings");

    let path = resolve_output_path(&base, "alice", ".mp4", 100).unwrap();

    assert_eq!(path, base.join("alice").join("alice.mp4"));
    assert!(base.join("alice").is_dir(), "stream directory should exist");
    assert!(!path.exists(), "planner must not create the file itself");
}

#[test]
fn test_collision_probing_starts_at_two() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().to_path_buf();
    let stream_dir = base.join("alice");
    fs::create_dir_all(&stream_dir).unwrap();
    fs::write(stream_dir.join("alice.mp4"), b"x").unwrap();

    let path = resolve_output_path(&base, "alice", ".mp4", 100).unwrap();
    assert_eq!(path, stream_dir.join("alice_2.mp4"));

    fs::write(&path, b"x").unwrap();
    let path = resolve_output_path(&base, "alice", ".mp4", 100).unwrap();
    assert_eq!(path, stream_dir.join("alice_3.mp4"));
}

#[test]
fn test_never_returns_an_existing_path() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().to_path_buf();
    let stream_dir = base.join("bob");
    fs::create_dir_all(&stream_dir).unwrap();

    fs::write(stream_dir.join("bob.flv"), b"x").unwrap();
    for n in 2..=5 {
        fs::write(stream_dir.join(format!("bob_{n}.flv")), b"x").unwrap();
    }

    let path = resolve_output_path(&base, "bob", ".flv", 100).unwrap();
    assert_eq!(path, stream_dir.join("bob_6.flv"));
    assert!(!path.exists());
}

#[test]
fn test_probe_is_bounded() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().to_path_buf();
    let stream_dir = base.join("carol");
    fs::create_dir_all(&stream_dir).unwrap();

    fs::write(stream_dir.join("carol.mp4"), b"x").unwrap();
    fs::write(stream_dir.join("carol_2.mp4"), b"x").unwrap();
    fs::write(stream_dir.join("carol_3.mp4"), b"x").unwrap();

    let err = resolve_output_path(&base, "carol", ".mp4", 3).unwrap_err();
    assert!(matches!(err, PlanError::Exhausted { probes: 3, .. }));
}

#[test]
fn test_directory_creation_failure_is_reported() {
    let temp = TempDir::new().unwrap();
    // A regular file where the base directory should go.
    let blocker = temp.path().join("not-a-dir");
    fs::write(&blocker, b"x").unwrap();

    let err = resolve_output_path(&blocker, "dave", ".mp4", 100).unwrap_err();
    assert!(matches!(err, PlanError::Filesystem { .. }));
}
