//! External inputs: the sample text and the requested font list.
//! Both are hard preconditions; everything after them degrades per
//! font instead of failing the run.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{InkError, Result};

/// Read the sample text verbatim. Missing file is fatal to the run.
pub fn load_sample_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => InkError::SampleTextMissing(path.to_path_buf()),
        _ => err.into(),
    })
}

/// Read the font name list: one family per line, blanks ignored,
/// duplicates collapsed. Missing or empty list is fatal.
pub fn load_font_list(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => InkError::FontListMissing(path.to_path_buf()),
        _ => err.into(),
    })?;
    let names = parse_font_list(&raw);
    if names.is_empty() {
        return Err(InkError::FontListEmpty(path.to_path_buf()));
    }
    Ok(names)
}

/// De-duplicate and sort requested family names.
pub fn parse_font_list(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Processing order: baseline first (so its measurement exists before
/// any relative value could be wanted), then the rest in sorted order.
pub fn order_with_baseline_first(names: &[String], baseline: &str) -> Vec<String> {
    let mut ordered = Vec::with_capacity(names.len());
    if names.iter().any(|name| name == baseline) {
        ordered.push(baseline.to_string());
    }
    ordered.extend(names.iter().filter(|name| *name != baseline).cloned());
    ordered
}
