//! Ink Measurement Engine: render every page of the wrapped sample
//! text and count pixels darker than the configured threshold.

use crate::config::LayoutConfig;
use crate::layout::{paginate, wrap_text};
use crate::locate::ResolvedFont;
use crate::render::{FaceRenderer, PageRaster, TextRenderer};

/// Ink total for one font under one [`LayoutConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InkMeasurement {
    pub family: String,
    pub dark_pixels: u64,
    pub pages: usize,
}

/// Wrap, paginate and rasterize `text`, summing dark pixels over all
/// pages. Lines are drawn top to bottom from the margin corner, each
/// offset by the configured line height.
pub fn measure_ink<R: TextRenderer>(
    family: &str,
    renderer: &R,
    text: &str,
    cfg: &LayoutConfig,
) -> InkMeasurement {
    let lines = wrap_text(text, renderer, cfg.text_width_px);
    let pages = paginate(&lines, cfg.lines_per_page());
    let mut dark_pixels = 0_u64;
    for page_lines in &pages {
        let mut page = PageRaster::new(cfg.page_width_px, cfg.page_height_px);
        let mut y = cfg.margin_px;
        for line in page_lines {
            renderer.draw_line(&mut page, line, cfg.margin_px, y);
            y += cfg.line_height_px;
        }
        dark_pixels += page.dark_pixels(cfg.darkness_threshold);
    }
    InkMeasurement {
        family: family.to_string(),
        dark_pixels,
        pages: pages.len(),
    }
}

/// Measure one resolved font; any per-font failure (unreadable file,
/// corrupt face, missing metrics) becomes "no measurement" rather than
/// aborting the run. Absence is not zero ink: callers must exclude the
/// font from ranking.
pub fn process_font(
    resolved: &ResolvedFont,
    text: &str,
    cfg: &LayoutConfig,
) -> Option<InkMeasurement> {
    match FaceRenderer::open(&resolved.path, resolved.face_index, cfg.font_size_px) {
        Ok(renderer) => Some(measure_ink(&resolved.family, &renderer, text, cfg)),
        Err(err) => {
            log::warn!("excluding {}: {err}", resolved.family);
            None
        }
    }
}
