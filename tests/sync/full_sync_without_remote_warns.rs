use crate::common::command::{git_output, init_repository_dir, session_output};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn full_sync_without_remote_warns(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "edited".to_string(),
    ));

    let output = session_output(repository_dir.path(), "1\nLocal only\n\n0\n");

    assert!(output.contains("FULL SYNCHRONIZATION"));
    assert!(output.contains("ℹ Pushing to remote..."));
    assert!(output.contains("✗ Command execution error"));
    assert!(output.contains("⚠ Push failed. You might need to pull first?"));
    assert!(!output.contains("Full synchronization completed!"));
    // the commit still happened before the push failed
    assert_eq!(
        git_output(repository_dir.path(), &["log", "-1", "--format=%s"]),
        "Local only"
    );
}
