use crate::common::command::{git_output, init_repository_dir, session_output};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_message_with_shell_metacharacters(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "edited".to_string(),
    ));
    let message = r#"fix "quotes" $(touch pwned) `touch pwned2`; echo done"#;

    let output = session_output(repository_dir.path(), &format!("2\n{}\n\n0\n", message));

    assert!(output.contains("✓ Commit created!"));
    assert_eq!(
        git_output(repository_dir.path(), &["log", "-1", "--format=%s"]),
        message
    );
    assert!(!repository_dir.path().join("pwned").exists());
    assert!(!repository_dir.path().join("pwned2").exists());
}
