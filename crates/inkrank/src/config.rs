//! Measurement configuration: the external options record and the
//! page geometry derived from it once per run.

use std::path::PathBuf;

/// Fully-resolved run options, owned by the caller (CLI, UI, test).
///
/// Constructed once and never mutated; every derived quantity lives in
/// [`LayoutConfig`] so that all fonts are measured under identical
/// geometry.
#[derive(Clone, Debug)]
pub struct Options {
    pub dpi: u32,
    pub font_size_pt: u32,
    /// Pixels with intensity strictly below this count as ink.
    pub darkness_threshold: u8,
    pub baseline_font: String,
    pub fonts_dir: PathBuf,
    pub line_spacing_factor: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dpi: 300,
            font_size_pt: 12,
            darkness_threshold: 200,
            baseline_font: "Arial".to_string(),
            fonts_dir: default_fonts_dir(),
            line_spacing_factor: 1.15,
        }
    }
}

fn default_fonts_dir() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Windows\Fonts")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/System/Library/Fonts")
    } else {
        PathBuf::from("/usr/share/fonts/truetype")
    }
}

/// Pixel geometry of a US-letter page (8.5x11 in, 1 in margins) at the
/// configured DPI. Shared by every font in a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub dpi: u32,
    pub font_size_px: u32,
    pub page_width_px: u32,
    pub page_height_px: u32,
    pub margin_px: u32,
    pub text_width_px: u32,
    pub line_height_px: u32,
    pub darkness_threshold: u8,
}

impl LayoutConfig {
    pub fn from_options(opts: &Options) -> Self {
        let dpi = opts.dpi;
        let margin_px = dpi; // 1 inch
        let page_width_px = (f64::from(dpi) * 8.5) as u32;
        let page_height_px = dpi * 11;
        let font_size_px = opts.font_size_pt * dpi / 72;
        // Degenerate sizes (tiny dpi, zero point size) truncate to 0;
        // keep the line height positive so pagination can divide by it.
        let line_height_px = ((font_size_px as f32 * opts.line_spacing_factor) as u32).max(1);
        Self {
            dpi,
            font_size_px,
            page_width_px,
            page_height_px,
            margin_px,
            text_width_px: page_width_px - 2 * margin_px,
            line_height_px,
            darkness_threshold: opts.darkness_threshold,
        }
    }

    /// Whole lines that fit between the top and bottom margins.
    /// Never less than one, so pagination always makes progress.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_height_px - 2 * self.margin_px;
        ((usable / self.line_height_px) as usize).max(1)
    }
}
