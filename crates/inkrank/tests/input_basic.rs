use std::fs;

use inkrank::input::{load_font_list, load_sample_text, order_with_baseline_first, parse_font_list};
use inkrank::InkError;
use pretty_assertions::assert_eq;

#[test]
fn parse_trims_dedupes_and_sorts() {
    let raw = "Georgia\n\n  Arial  \nVerdana\nArial\n   \n";
    assert_eq!(parse_font_list(raw), vec!["Arial", "Georgia", "Verdana"]);
}

#[test]
fn baseline_moves_to_front_when_present() {
    let names = vec![
        "Arial".to_string(),
        "Courier New".to_string(),
        "Georgia".to_string(),
    ];
    let ordered = order_with_baseline_first(&names, "Georgia");
    assert_eq!(ordered, vec!["Georgia", "Arial", "Courier New"]);
}

#[test]
fn absent_baseline_leaves_order_untouched() {
    let names = vec!["Arial".to_string(), "Georgia".to_string()];
    let ordered = order_with_baseline_first(&names, "Calibri");
    assert_eq!(ordered, names);
}

#[test]
fn missing_sample_text_is_fatal_with_named_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample_text.txt");
    let err = load_sample_text(&path).unwrap_err();
    assert!(matches!(err, InkError::SampleTextMissing(p) if p == path));
}

#[test]
fn sample_text_is_read_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample_text.txt");
    fs::write(&path, "Hello world.\nSecond line.").unwrap();
    assert_eq!(load_sample_text(&path).unwrap(), "Hello world.\nSecond line.");
}

#[test]
fn unreadable_sample_text_is_not_reported_as_missing() {
    // A directory opens but cannot be read as text; that is an i/o
    // failure, not a missing input.
    let dir = tempfile::tempdir().unwrap();
    let err = load_sample_text(dir.path()).unwrap_err();
    assert!(matches!(err, InkError::Io(_)));
}

#[test]
fn unreadable_font_list_is_not_reported_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_font_list(dir.path()).unwrap_err();
    assert!(matches!(err, InkError::Io(_)));
}

#[test]
fn missing_font_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fonts.txt");
    let err = load_font_list(&path).unwrap_err();
    assert!(matches!(err, InkError::FontListMissing(p) if p == path));
}

#[test]
fn blank_font_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fonts.txt");
    fs::write(&path, "\n   \n\n").unwrap();
    let err = load_font_list(&path).unwrap_err();
    assert!(matches!(err, InkError::FontListEmpty(p) if p == path));
}
