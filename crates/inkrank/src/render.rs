//! Page rasters and the text rendering seam.
//!
//! [`TextRenderer`] is the boundary between layout/measurement and the
//! glyph rasterizer: width measurement for word-wrap and line drawing
//! onto a grayscale page. Production code uses the fontdue-backed
//! [`FaceRenderer`]; tests substitute a deterministic fake.

use std::fs;
use std::path::Path;

use crate::error::{InkError, Result};

/// In-memory grayscale page: white (255) background, ink darkens
/// toward 0. Anti-aliased grays are kept on purpose; the threshold
/// test decides what counts as ink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PageRaster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![255; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Darken one pixel to `value` if it is darker than what is there.
    /// Out-of-page coordinates are clipped silently.
    pub fn darken(&mut self, x: i32, y: i32, value: u8) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        if value < self.pixels[idx] {
            self.pixels[idx] = value;
        }
    }

    /// 256-bucket intensity histogram.
    pub fn histogram(&self) -> [u64; 256] {
        let mut buckets = [0_u64; 256];
        for &px in &self.pixels {
            buckets[px as usize] += 1;
        }
        buckets
    }

    /// Pixels strictly darker than `threshold`.
    pub fn dark_pixels(&self, threshold: u8) -> u64 {
        self.histogram()[..threshold as usize].iter().sum()
    }
}

/// Rendering operations a concrete face must provide to the layout and
/// measurement engines.
pub trait TextRenderer {
    /// Advance width of `line` in pixels at the bound size.
    fn line_width(&self, line: &str) -> f32;

    /// Draw `line` in black with the line box's top-left at `(x, y)`.
    fn draw_line(&self, page: &mut PageRaster, line: &str, x: u32, y: u32);
}

/// One font face bound to a pixel size, backed by fontdue.
pub struct FaceRenderer {
    font: fontdue::Font,
    px: f32,
    ascent: f32,
}

impl FaceRenderer {
    /// Open a face and bind it to `font_size_px`. Any parse or metrics
    /// failure makes the whole face unusable.
    pub fn open(path: &Path, face_index: u32, font_size_px: u32) -> Result<Self> {
        let px = font_size_px as f32;
        let data = fs::read(path)?;
        let settings = fontdue::FontSettings {
            collection_index: face_index,
            scale: px,
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(data, settings).map_err(|reason| {
            InkError::FaceUnusable {
                path: path.to_path_buf(),
                face_index,
                reason: reason.to_string(),
            }
        })?;
        let ascent = font
            .horizontal_line_metrics(px)
            .map(|metrics| metrics.ascent)
            .ok_or_else(|| InkError::FaceUnusable {
                path: path.to_path_buf(),
                face_index,
                reason: "no horizontal line metrics".to_string(),
            })?;
        Ok(Self { font, px, ascent })
    }
}

impl TextRenderer for FaceRenderer {
    fn line_width(&self, line: &str) -> f32 {
        line.chars()
            .map(|ch| self.font.metrics(ch, self.px).advance_width)
            .sum()
    }

    fn draw_line(&self, page: &mut PageRaster, line: &str, x: u32, y: u32) {
        let baseline = y as f32 + self.ascent;
        let mut pen = x as f32;
        for ch in line.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, self.px);
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = coverage[row * metrics.width + col];
                    if alpha == 0 {
                        continue;
                    }
                    let px_x = pen as i32 + metrics.xmin + col as i32;
                    let px_y =
                        baseline as i32 - (metrics.ymin + metrics.height as i32) + row as i32;
                    // Full coverage is full ink (0); partial coverage
                    // leaves a gray the threshold test may still count.
                    page.darken(px_x, px_y, 255 - alpha);
                }
            }
            pen += metrics.advance_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_is_all_white() {
        let page = PageRaster::new(10, 10);
        assert_eq!(page.histogram()[255], 100);
        assert_eq!(page.dark_pixels(255), 0);
    }

    #[test]
    fn dark_pixel_threshold_is_exclusive() {
        let mut page = PageRaster::new(4, 4);
        page.darken(1, 1, 199);
        assert_eq!(page.dark_pixels(200), 1);
        assert_eq!(page.dark_pixels(199), 0);
    }

    #[test]
    fn darken_keeps_the_darker_value_and_clips() {
        let mut page = PageRaster::new(4, 4);
        page.darken(0, 0, 50);
        page.darken(0, 0, 120);
        assert_eq!(page.dark_pixels(51), 1);
        // off-page writes are ignored
        page.darken(-1, 0, 0);
        page.darken(0, 4, 0);
        assert_eq!(page.dark_pixels(255), 1);
    }
}
