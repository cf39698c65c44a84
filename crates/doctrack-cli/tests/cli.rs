//! End-to-end tests for the `doctrack` binary.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const HEADER: &str = "Id,Path,Title,R-A-G,Assignee\n";

fn doctrack() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_doctrack"));
    for var in [
        "RUST_LOG",
        "DOCTRACK_SORTED",
        "DOCTRACK_FOLLOW_LINKS",
        "DOCTRACK_CONFIG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn run(args: &[&Path]) -> Output {
    doctrack().args(args).output().expect("failed to spawn doctrack")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn create_test_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn scenario_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "a.md", "Some text\n\n# Alpha\n\nBody\n");
    create_test_file(tmp.path(), "b/c.markdown", "---\ntitle: Beta\n---\n\n# Ignored\n");
    tmp
}

// ----------------------------------------------------------------------------
// Standard output
// ----------------------------------------------------------------------------

#[test]
fn test_scenario_to_stdout() {
    let tree = scenario_tree();
    let output = run(&[tree.path()]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{HEADER}0,a.md,Alpha,R,\n1,b/c.markdown,Beta,R,\n")
    );
}

#[test]
fn test_empty_tree_prints_header_only() {
    let tree = TempDir::new().unwrap();
    let output = run(&[tree.path()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), HEADER);
}

#[test]
fn test_repeat_runs_identical() {
    let tree = TempDir::new().unwrap();
    for name in ["x.md", "y.MD", "n/one.md", "n/two.markdown", "n/m/three.md"] {
        create_test_file(tree.path(), name, &format!("# {name}\n"));
    }

    let first = run(&[tree.path()]);
    let second = run(&[tree.path()]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout(&first).lines().count(), 6);
}

#[test]
fn test_untitled_and_malformed_documents() {
    let tree = TempDir::new().unwrap();
    create_test_file(tree.path(), "a.md", "---\ntitle: [broken\n---\n# Fallback\n");
    create_test_file(tree.path(), "b.md", "nothing to see\n");

    let output = doctrack()
        .arg(tree.path())
        .arg("--sorted")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{HEADER}0,a.md,Fallback,R,\n1,b.md,,R,\n")
    );
}

#[test]
fn test_logs_go_to_stderr() {
    let tree = scenario_tree();
    let output = doctrack().arg(tree.path()).arg("-vv").output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).starts_with(HEADER));
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
}

// ----------------------------------------------------------------------------
// File output
// ----------------------------------------------------------------------------

#[test]
fn test_scenario_to_file() {
    let tree = scenario_tree();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("report.csv");

    let output = run(&[tree.path(), out.as_path()]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("Writing output CSV to {}\n", out.display())
    );
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        format!("{HEADER}0,a.md,Alpha,R,\n1,b/c.markdown,Beta,R,\n")
    );
}

#[test]
fn test_failed_scan_leaves_output_untouched() {
    let tree = TempDir::new().unwrap();
    create_test_file(tree.path(), "ok.md", "# Ok\n");
    std::fs::write(tree.path().join("bad.md"), b"\xff\xfe\xfd").unwrap();

    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("report.csv");

    let output = run(&[tree.path(), out.as_path()]);

    assert!(!output.status.success());
    assert!(!out.exists());
    assert!(output.stdout.is_empty());
}

// ----------------------------------------------------------------------------
// Configuration
// ----------------------------------------------------------------------------

#[test]
fn test_config_file_enables_sorting() {
    let tree = TempDir::new().unwrap();
    for name in ["c.md", "a.md", "b.md"] {
        create_test_file(tree.path(), name, "");
    }
    let cfg_dir = TempDir::new().unwrap();
    let cfg = cfg_dir.path().join("doctrack.toml");
    std::fs::write(&cfg, "[scan]\nsorted = true\n").unwrap();

    let output = doctrack()
        .arg(tree.path())
        .arg("--config")
        .arg(&cfg)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{HEADER}0,a.md,,R,\n1,b.md,,R,\n2,c.md,,R,\n")
    );
}

#[test]
fn test_invalid_config_fails() {
    let tree = scenario_tree();
    let cfg_dir = TempDir::new().unwrap();
    let cfg = cfg_dir.path().join("doctrack.toml");
    std::fs::write(&cfg, "[scan]\nunknown_option = 1\n").unwrap();

    let output = doctrack()
        .arg(tree.path())
        .env("DOCTRACK_CONFIG", &cfg)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

// ----------------------------------------------------------------------------
// Failures
// ----------------------------------------------------------------------------

#[test]
fn test_missing_root_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run(&[tmp.path().join("nope").as_path()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to build report"));
}

#[test]
fn test_root_is_file_fails() {
    let tmp = TempDir::new().unwrap();
    create_test_file(tmp.path(), "single.md", "# Single\n");

    let output = run(&[tmp.path().join("single.md").as_path()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not a directory"));
}

#[test]
fn test_missing_argument_fails() {
    let output = doctrack().output().unwrap();
    assert!(!output.status.success());
}
