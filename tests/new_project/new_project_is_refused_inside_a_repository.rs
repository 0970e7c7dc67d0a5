use crate::common::command::{git_output, init_repository_dir, session_output};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn new_project_is_refused_inside_a_repository(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;

    let output = session_output(repository_dir.path(), "3\n\n0\n");

    assert!(output.contains("✗ This is already a Git repository!"));
    assert!(!repository_dir.path().join(".gitignore").exists());
    assert_eq!(git_output(repository_dir.path(), &["rev-list", "--count", "HEAD"]), "1");
}
