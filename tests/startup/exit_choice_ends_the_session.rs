use crate::common::command::{run_mygit_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn exit_choice_ends_the_session(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = workspace_dir.path().canonicalize()?.display().to_string();

    run_mygit_command(workspace_dir.path(), "0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("MyGit - Git Wrapper"))
        .stdout(predicate::str::contains(format!(
            "Current directory: {}",
            dir_absolute_path
        )))
        .stdout(predicate::str::contains("Git repository: ✗"))
        .stdout(predicate::str::contains("0. 🚪 Exit"))
        .stdout(predicate::str::ends_with("✓ Goodbye!\n"));

    Ok(())
}
