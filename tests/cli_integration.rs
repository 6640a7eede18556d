/*!
 * Integration tests driving the dirprint binary
 */

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dirprint"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

fn setup(root: &Path) {
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("a.py"), "1\n2\n").unwrap();
    fs::write(root.join("b").join("c.py"), "1\n2\n3\n").unwrap();
}

#[test]
fn test_prints_report_to_stdout() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("proj");
    setup(&root);

    let output = run(&["proj", "-lc"], temp_dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("proj Directory Structure:\nproj/ (5 lines, 100%)\n"));
    assert!(stdout.contains("└── a.py (2 lines, 40.0%)\n"));
    assert!(stdout.contains("a.py:\n```python\n1\n2\n\n```\n"));
}

#[test]
fn test_export_writes_file_only() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("proj");
    setup(&root);

    let output = run(
        &["proj", "--omit", "^b^", "--sos", "--export", "out.txt"],
        temp_dir.path(),
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = fs::read_to_string(temp_dir.path().join("out.txt")).unwrap();
    assert!(written.contains("├── [omitted] b/\n│   └── c.py\n"));
    assert!(written.contains("b/:\n[Directory contents omitted for brevity...]\n"));
}

#[test]
fn test_export_inside_root_is_stable() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("proj");
    setup(&root);
    let snapshot = root.join("snap.txt");

    let mut runs = Vec::new();
    for _ in 0..3 {
        let output = run(&["proj", "-E", "proj/snap.txt"], temp_dir.path());
        assert!(output.status.success());
        runs.push(fs::read_to_string(&snapshot).unwrap());
    }

    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
    // The export shows up as an empty file in its own report
    assert!(runs[0].contains("snap.txt:\n```\n\n```\n"));
    assert_eq!(runs[0].matches("<proj-File-Contents>").count(), 2);
}

#[test]
fn test_missing_root_exits_non_zero() {
    let temp_dir = tempdir().unwrap();

    let output = run(&["does-not-exist"], temp_dir.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_generate_completions() {
    let temp_dir = tempdir().unwrap();

    let output = run(&["--generate", "bash"], temp_dir.path());
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("dirprint"));
}
