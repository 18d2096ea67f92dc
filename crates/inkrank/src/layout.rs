//! Text Layout Engine: deterministic greedy word-wrap and fixed
//! capacity pagination.
//!
//! The wrap is intentionally simple (no kerning, no hyphenation) so
//! every font is laid out under the exact same rule and relative
//! comparisons stay fair.

use crate::render::TextRenderer;

/// Greedy per-paragraph word-wrap into lines no wider than
/// `text_width_px` (as measured by `renderer`).
///
/// Blank source lines yield one empty output line each, preserving the
/// sample text's vertical whitespace. A single word wider than the
/// budget goes alone on its own line, never split mid-word.
pub fn wrap_text<R: TextRenderer>(text: &str, renderer: &R, text_width_px: u32) -> Vec<String> {
    let budget = text_width_px as f32;
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut words = paragraph.split_whitespace();
        let Some(first) = words.next() else {
            lines.push(String::new());
            continue;
        };
        let mut current = first.to_string();
        for word in words {
            let tentative = format!("{current} {word}");
            if renderer.line_width(&tentative) <= budget {
                current = tentative;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    lines
}

/// Partition wrapped lines into consecutive pages of `lines_per_page`
/// lines; the last page may be shorter and an exact multiple produces
/// no empty trailing page.
pub fn paginate(lines: &[String], lines_per_page: usize) -> Vec<Vec<String>> {
    lines
        .chunks(lines_per_page.max(1))
        .map(<[String]>::to_vec)
        .collect()
}
