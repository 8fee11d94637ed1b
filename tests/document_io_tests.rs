//! Tests for document save/load against the real filesystem.
use std::fs;
use std::path::Path;

use linedit::{Document, EditorError};
use tempfile::TempDir;

// A dot anywhere in the save path suppresses the default extension, and the
// default tempdir prefix is ".tmp", so use a dot-free directory name.
fn tempdir() -> TempDir {
    tempfile::Builder::new()
        .prefix("linedit-test")
        .tempdir()
        .expect("tempdir")
}

fn document_with(lines: &[&str]) -> Document {
    let mut doc = Document::new();
    doc.append_lines(lines.iter().map(|line| line.to_string()));
    doc
}

fn save_to(doc: &Document, path: &Path) -> linedit::SaveReport {
    doc.save_to(path.to_str().expect("utf-8 temp path"))
        .expect("save")
}

#[test]
fn test_save_appends_default_extension() {
    let dir = tempdir();
    let doc = document_with(&["Hello", "World"]);

    let report = save_to(&doc, &dir.path().join("doc"));

    assert_eq!(report.path, dir.path().join("doc.txt"));
    assert_eq!(report.lines_written, 2);
    assert_eq!(fs::read_to_string(&report.path).expect("read"), "Hello\nWorld");
}

#[test]
fn test_save_keeps_explicit_extension() {
    let dir = tempdir();
    let doc = document_with(&["alpha"]);

    let report = save_to(&doc, &dir.path().join("notes.md"));

    assert_eq!(report.path, dir.path().join("notes.md"));
    assert!(report.path.exists());
}

#[test]
fn test_save_writes_no_trailing_newline() {
    let dir = tempdir();
    let doc = document_with(&["only line"]);

    let report = save_to(&doc, &dir.path().join("single.txt"));

    assert_eq!(fs::read_to_string(&report.path).expect("read"), "only line");
}

#[test]
fn test_save_empty_document_creates_no_file() {
    let dir = tempdir();
    let doc = Document::new();
    let target = dir.path().join("untouched");

    let result = doc.save_to(target.to_str().expect("utf-8 temp path"));

    assert!(matches!(result, Err(EditorError::EmptyDocument)));
    assert!(!target.exists());
    assert!(!dir.path().join("untouched.txt").exists());
}

#[test]
fn test_save_empty_document_never_overwrites() {
    let dir = tempdir();
    let target = dir.path().join("kept.txt");
    fs::write(&target, "precious").expect("seed file");

    let doc = Document::new();
    let result = doc.save_to(target.to_str().expect("utf-8 temp path"));

    assert!(matches!(result, Err(EditorError::EmptyDocument)));
    assert_eq!(fs::read_to_string(&target).expect("read"), "precious");
}

#[test]
fn test_round_trip_identity() {
    let dir = tempdir();
    let original = ["Hello", "World", "  indented  ", "last"];
    let doc = document_with(&original);

    let report = save_to(&doc, &dir.path().join("roundtrip"));

    let mut reloaded = Document::new();
    let count = reloaded.load_from(&report.path).expect("load");

    assert_eq!(count, original.len());
    assert_eq!(reloaded.lines(), original);
}

#[test]
fn test_load_replaces_previous_content() {
    let dir = tempdir();
    let path = dir.path().join("incoming.txt");
    fs::write(&path, "new one\nnew two").expect("seed file");

    let mut doc = document_with(&["old"]);
    let count = doc.load_from(&path).expect("load");

    assert_eq!(count, 2);
    assert_eq!(doc.lines(), ["new one", "new two"]);
}

#[test]
fn test_load_missing_file_keeps_document_unchanged() {
    let dir = tempdir();
    let mut doc = document_with(&["keep", "me"]);

    let result = doc.load_from(dir.path().join("does-not-exist.txt"));

    assert!(matches!(result, Err(EditorError::Io { .. })));
    assert_eq!(doc.lines(), ["keep", "me"]);
}

#[test]
fn test_load_empty_file_empties_document() {
    let dir = tempdir();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").expect("seed file");

    let mut doc = document_with(&["gone"]);
    let count = doc.load_from(&path).expect("load");

    assert_eq!(count, 0);
    assert!(doc.is_empty());
}

// The full scenario: append, render, save, load, clear.
#[test]
fn test_editing_scenario() {
    let dir = tempdir();
    let mut doc = Document::new();

    let appended = doc.append_lines(["Hello".to_string(), "World".to_string()]);
    assert_eq!(appended, 2);

    let view: Vec<(usize, String)> = doc
        .render()
        .expect("non-empty")
        .map(|(index, text)| (index, text.to_string()))
        .collect();
    assert_eq!(view, [(1, "Hello".to_string()), (2, "World".to_string())]);

    let report = save_to(&doc, &dir.path().join("doc"));
    assert_eq!(report.path, dir.path().join("doc.txt"));
    assert_eq!(report.lines_written, 2);
    assert_eq!(fs::read_to_string(&report.path).expect("read"), "Hello\nWorld");

    let mut reloaded = Document::new();
    assert_eq!(reloaded.load_from(&report.path).expect("load"), 2);
    assert_eq!(reloaded.lines(), ["Hello", "World"]);

    assert_eq!(reloaded.clear().expect("clear"), 2);
    assert!(reloaded.is_empty());
}
