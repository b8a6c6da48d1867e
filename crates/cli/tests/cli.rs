use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cargo_bin() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("md2deck").unwrap()
}

const SAMPLE: &str = "\
# Pitch
- what we do
Note: open strong

## Slide 2: Numbers
1. revenue
2. growth
";

#[test]
fn converts_markdown_to_pptx() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("deck.md");
    let output = dir.path().join("deck.pptx");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = cargo_bin();
    cmd.arg(&input).arg("--output").arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total slides: 3 (1 title + 2 content)"));

    // The output is a ZIP package.
    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK\x03\x04"));
}

#[test]
fn creates_missing_output_directories() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("deck.md");
    let output = dir.path().join("out/nested/deck.pptx");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = cargo_bin();
    cmd.arg(&input).arg("-o").arg(&output);

    cmd.assert().success();
    assert!(output.exists());
}

#[test]
fn missing_input_is_a_fatal_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("deck.pptx");

    let mut cmd = cargo_bin();
    cmd.arg(dir.path().join("nope.md")).arg("-o").arg(&output);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    assert!(!output.exists());
}

#[test]
fn document_without_slides_is_refused() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("deck.md");
    let output = dir.path().join("deck.pptx");
    fs::write(&input, "just prose\n- a bullet with no heading\n").unwrap();

    let mut cmd = cargo_bin();
    cmd.arg(&input).arg("-o").arg(&output);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No slides found"));
    assert!(!output.exists());
}

#[test]
fn title_and_subtitle_overrides_are_accepted() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("deck.md");
    let output = dir.path().join("deck.pptx");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = cargo_bin();
    cmd.arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--title")
        .arg("Series A")
        .arg("--subtitle")
        .arg("Confidential");

    cmd.assert().success();
    assert!(output.exists());
}
