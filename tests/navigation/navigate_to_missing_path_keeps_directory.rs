use crate::common::command::{session_output, workspace_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn navigate_to_missing_path_keeps_directory(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = workspace_dir.path().canonicalize()?.display().to_string();
    let missing = workspace_dir.path().join("does").join("not").join("exist");

    let output = session_output(
        workspace_dir.path(),
        &format!("8\nc\n{}\n\n0\n", missing.display()),
    );

    assert!(output.contains("Enter directory path (can use ~ for home):"));
    assert!(output.contains(&format!("✗ Directory does not exist: {}", missing.display())));
    assert!(!output.contains("Changed to:"));
    // the menu after the failed navigation still shows the starting directory
    assert_eq!(
        output.matches(&format!("Current directory: {}\n", start)).count(),
        3
    );

    Ok(())
}

#[rstest]
fn navigate_with_tilde_expands_home(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let nested = workspace_dir.path().join("deep");
    std::fs::create_dir_all(nested.join("inner"))?;
    let target = nested.join("inner").canonicalize()?.display().to_string();

    let output = session_output(workspace_dir.path(), "8\nc\n~/deep/inner\n\n0\n");

    assert!(output.contains(&format!("✓ Changed to: {}", target)));

    Ok(())
}

#[rstest]
#[case("8\n99\n\n0\n", "✗ Invalid choice!")]
#[case("8\n0\n\n0\n", "ℹ Cancelled")]
fn navigate_without_a_target(
    workspace_dir: TempDir,
    #[case] input: &str,
    #[case] expected: &str,
) {
    let output = session_output(workspace_dir.path(), input);

    assert!(output.contains(expected));
    assert!(!output.contains("Changed to:"));
}
