//! End-to-end tests for the `hilbert` binary

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

const HILBERT_KS: &str = "\
# K
(A => (B => A))
# S
((A => (B => C)) => ((A => B) => (A => C)))
";

fn axiom_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write axioms");
    file
}

fn run(goal: &str, axioms: &NamedTempFile, toggles: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hilbert"))
        .arg(axioms.path())
        .args(toggles)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn hilbert");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(goal.as_bytes())
        .unwrap();
    child.wait_with_output().expect("wait for hilbert")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_proves_identity() {
    let axioms = axiom_file(HILBERT_KS);
    let output = run("(A => A)\n", &axioms, &[]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("TERMS:\n    A\n    (A => A)\n\nGOAL FOUND!\n"));
    assert!(out.contains("|- (A => A)"));
}

#[test]
fn test_unproved_exit_status() {
    let axioms = axiom_file("(A => (B => A))\n");
    let output = run("(p => p)\n", &axioms, &[]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "TERMS:\n    p\n    (p => p)\n\n");
}

#[test]
fn test_toggles() {
    let axioms = axiom_file("(A => (B => A))\n");
    let output = run("(p => p)\n", &axioms, &["+backward", "-history"]);
    assert!(output.status.success());
    assert!(!stdout(&output).contains("DEDUCTED"));

    let output = run("(p => p)\n", &axioms, &["+axioms"]);
    let out = stdout(&output);
    assert!(out.contains("Axiom: (A => (B => A))\n   Axiom = (A => (B => A))\n"));
}

#[test]
fn test_unknown_toggle_is_ignored() {
    let axioms = axiom_file(HILBERT_KS);
    let output = run("(A => A)\n", &axioms, &["+verbose"]);
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("+verbose"));
}

#[test]
fn test_json_output() {
    let axioms = axiom_file(HILBERT_KS);
    let output = run("(A => A)\n", &axioms, &["-history", "+json"]);
    let out = stdout(&output);
    let json_start = out.find('{').expect("json object in output");
    let json: serde_json::Value = serde_json::from_str(&out[json_start..]).unwrap();
    assert_eq!(json["proved"], true);
    assert_eq!(json["goal"], "(A => A)");
}

#[test]
fn test_parse_error_on_goal() {
    let axioms = axiom_file(HILBERT_KS);
    let output = run("(p => \n", &axioms, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: "));
}

#[test]
fn test_empty_goal() {
    let axioms = axiom_file(HILBERT_KS);
    let output = run("", &axioms, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no goal formula"));
}

#[test]
fn test_deeply_nested_goal_fails_cleanly() {
    let axioms = axiom_file(HILBERT_KS);
    let goal = format!("{}p\n", "!".repeat(5_000));
    let output = run(&goal, &axioms, &["-history"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: "), "{}", stderr);
    assert!(stderr.contains("nested deeper than 256"), "{}", stderr);
}
