//! Test support utilities for inkrank.
//!
//! This module provides helper types that are useful for testing
//! layout and measurement without a real font face on disk, but are
//! not part of the public API.

use crate::render::{PageRaster, TextRenderer};

/// A deterministic renderer: every char advances by a fixed width, and
/// every non-space char is drawn as a solid black block.
///
/// Makes wrap decisions and ink totals exactly predictable in tests.
pub struct FixedAdvanceRenderer {
    pub advance: f32,
    pub glyph_width: u32,
    pub glyph_height: u32,
}

impl FixedAdvanceRenderer {
    pub fn new(advance: f32, glyph_width: u32, glyph_height: u32) -> Self {
        Self {
            advance,
            glyph_width,
            glyph_height,
        }
    }

    /// Ink a single glyph block contributes when fully on the page.
    pub fn pixels_per_glyph(&self) -> u64 {
        u64::from(self.glyph_width) * u64::from(self.glyph_height)
    }
}

impl TextRenderer for FixedAdvanceRenderer {
    fn line_width(&self, line: &str) -> f32 {
        line.chars().count() as f32 * self.advance
    }

    fn draw_line(&self, page: &mut PageRaster, line: &str, x: u32, y: u32) {
        let mut pen = x as f32;
        for ch in line.chars() {
            if ch != ' ' {
                for row in 0..self.glyph_height {
                    for col in 0..self.glyph_width {
                        page.darken(pen as i32 + col as i32, (y + row) as i32, 0);
                    }
                }
            }
            pen += self.advance;
        }
    }
}

/// Build a minimal in-memory TrueType face: the required metric
/// tables, one Windows Unicode family-name record, and (when
/// `weight_class` is given) an OS/2 table carrying that usWeightClass.
/// Enough for the locator's metadata probe; it holds no glyph outlines
/// and cannot be rendered.
pub fn synthetic_face(family: &str, weight_class: Option<u16>) -> Vec<u8> {
    let mut tables: Vec<([u8; 4], Vec<u8>)> = Vec::new();
    if let Some(weight) = weight_class {
        tables.push((*b"OS/2", os2_table(weight)));
    }
    tables.push((*b"head", head_table()));
    tables.push((*b"hhea", hhea_table()));
    tables.push((*b"maxp", maxp_table()));
    tables.push((*b"name", name_table(family)));

    let count = tables.len() as u16;
    let mut search_range = 16_u16;
    let mut entry_selector = 0_u16;
    while search_range * 2 <= count * 16 {
        search_range *= 2;
        entry_selector += 1;
    }

    let mut font = Vec::new();
    be32(&mut font, 0x0001_0000); // sfnt version
    be16(&mut font, count);
    be16(&mut font, search_range);
    be16(&mut font, entry_selector);
    be16(&mut font, count * 16 - search_range);

    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in &tables {
        font.extend_from_slice(tag);
        be32(&mut font, 0); // checksum, not validated
        be32(&mut font, offset as u32);
        be32(&mut font, data.len() as u32);
        offset += (data.len() + 3) & !3;
    }
    for (_, data) in &tables {
        font.extend_from_slice(data);
        while font.len() % 4 != 0 {
            font.push(0);
        }
    }
    font
}

fn be16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn be32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn bei16(buf: &mut Vec<u8>, value: i16) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn head_table() -> Vec<u8> {
    let mut t = Vec::new();
    be32(&mut t, 0x0001_0000); // version
    be32(&mut t, 0); // font revision
    be32(&mut t, 0); // checksum adjustment
    be32(&mut t, 0x5F0F_3CF5); // magic
    be16(&mut t, 0); // flags
    be16(&mut t, 1000); // units per em
    t.extend_from_slice(&[0; 16]); // created / modified
    for _ in 0..4 {
        bei16(&mut t, 0); // bbox
    }
    be16(&mut t, 0); // mac style
    be16(&mut t, 8); // lowest rec ppem
    bei16(&mut t, 2); // font direction hint
    bei16(&mut t, 0); // index to loc format
    bei16(&mut t, 0); // glyph data format
    t
}

fn hhea_table() -> Vec<u8> {
    let mut t = Vec::new();
    be32(&mut t, 0x0001_0000); // version
    bei16(&mut t, 800); // ascender
    bei16(&mut t, -200); // descender
    bei16(&mut t, 0); // line gap
    be16(&mut t, 500); // advance width max
    for _ in 0..3 {
        bei16(&mut t, 0); // min lsb, min rsb, x max extent
    }
    bei16(&mut t, 1); // caret slope rise
    bei16(&mut t, 0); // caret slope run
    bei16(&mut t, 0); // caret offset
    for _ in 0..4 {
        bei16(&mut t, 0); // reserved
    }
    bei16(&mut t, 0); // metric data format
    be16(&mut t, 1); // number of h-metrics
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = Vec::new();
    be32(&mut t, 0x0000_5000); // version 0.5
    be16(&mut t, 1); // glyph count
    t
}

fn name_table(family: &str) -> Vec<u8> {
    let utf16: Vec<u8> = family
        .encode_utf16()
        .flat_map(|unit| unit.to_be_bytes())
        .collect();
    let mut t = Vec::new();
    be16(&mut t, 0); // format
    be16(&mut t, 1); // record count
    be16(&mut t, 18); // string storage offset
    be16(&mut t, 3); // Windows platform
    be16(&mut t, 1); // Unicode BMP encoding
    be16(&mut t, 0x0409); // en-US
    be16(&mut t, 1); // family name id
    be16(&mut t, utf16.len() as u16);
    be16(&mut t, 0); // string offset
    t.extend_from_slice(&utf16);
    t
}

fn os2_table(weight: u16) -> Vec<u8> {
    let mut t = Vec::new();
    be16(&mut t, 0); // version 0, 78 bytes
    bei16(&mut t, 500); // x avg char width
    be16(&mut t, weight);
    be16(&mut t, 5); // width class: medium
    be16(&mut t, 0); // fs type
    for _ in 0..10 {
        bei16(&mut t, 0); // sub/superscript and strikeout metrics
    }
    bei16(&mut t, 0); // family class
    t.extend_from_slice(&[0; 10]); // panose
    t.extend_from_slice(&[0; 16]); // unicode ranges
    t.extend_from_slice(b"TEST"); // vendor id
    be16(&mut t, 0x40); // fs selection: regular
    be16(&mut t, 32); // first char index
    be16(&mut t, 126); // last char index
    bei16(&mut t, 800); // typo ascender
    bei16(&mut t, -200); // typo descender
    bei16(&mut t, 0); // typo line gap
    be16(&mut t, 800); // win ascent
    be16(&mut t, 200); // win descent
    t
}
