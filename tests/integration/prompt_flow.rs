//! Integration tests for the interactive output-name flow.
//!
//! Drives the prompt loop with scripted stdin against real directories, so
//! the existence checks hit the filesystem the way a run would.

use pdfbundle::prompt::prompt_output_path;
use std::io::Cursor;
use std::path::Path;

use crate::common::pdf_dir;

fn scripted(script: &str, dir: &Path) -> (std::path::PathBuf, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    let path = prompt_output_path(&mut input, &mut out, dir).expect("prompt should succeed");
    (path, String::from_utf8(out).unwrap())
}

#[test]
fn test_fresh_name_is_accepted_first_try() {
    let dir = pdf_dir(&["a.pdf"]);

    let (path, transcript) = scripted("merged\n", dir.path());

    assert_eq!(path, dir.path().join("merged.pdf"));
    assert!(transcript.contains("Name for the merged file"));
    assert!(!transcript.contains("already exists"));
}

#[test]
fn test_colliding_name_declined_then_renamed() {
    // "a" collides with an input file; the user backs out and picks a
    // fresh name instead.
    let dir = pdf_dir(&["a.pdf", "b.pdf"]);

    let (path, transcript) = scripted("a\nn\ncombined\n", dir.path());

    assert_eq!(path, dir.path().join("combined.pdf"));
    assert!(transcript.contains("already exists"));
    // The name prompt appears twice: once initially, once after declining.
    assert_eq!(transcript.matches("Name for the merged file").count(), 2);
}

#[test]
fn test_colliding_name_confirmed_is_kept() {
    let dir = pdf_dir(&["a.pdf"]);

    let (path, _) = scripted("a\nY\n", dir.path());
    assert_eq!(path, dir.path().join("a.pdf"));
}

#[test]
fn test_blank_answers_never_produce_a_path() {
    let dir = pdf_dir(&["a.pdf"]);

    let (path, transcript) = scripted("\n\n\nmerged\n", dir.path());

    assert_eq!(path, dir.path().join("merged.pdf"));
    assert_eq!(transcript.matches("cannot be empty").count(), 3);
}
