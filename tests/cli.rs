//! Binary E2E tests

use std::process::Command;

use tempfile::TempDir;

fn casbin_cli(args: &[&str], cwd: &TempDir) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_casbin-cli"))
        .args(args)
        .current_dir(cwd.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn no_arguments_prints_help_and_exits_with_one() {
    let dir = TempDir::new().unwrap();

    let output = casbin_cli(&[], &dir);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn version_failure_prints_diagnostic_and_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("missing").join("pom.xml");

    let output = casbin_cli(&["--version", "--manifest", manifest.to_str().unwrap()], &dir);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to retrieve version information."));
    assert!(stderr.contains("Run 'casbin-cli --help' for usage."));
}
