use inkrank::config::LayoutConfig;
use inkrank::measure::measure_ink;
use inkrank::test_support::FixedAdvanceRenderer;
use pretty_assertions::assert_eq;

fn small_config() -> LayoutConfig {
    LayoutConfig {
        dpi: 100,
        font_size_px: 10,
        page_width_px: 100,
        page_height_px: 100,
        margin_px: 10,
        text_width_px: 80,
        line_height_px: 10,
        darkness_threshold: 200,
    }
}

#[test]
fn counts_exact_ink_for_solid_glyph_blocks() {
    let renderer = FixedAdvanceRenderer::new(10.0, 8, 8);
    let cfg = small_config();
    // Four glyphs, the space contributes nothing.
    let measurement = measure_ink("Test", &renderer, "ab cd", &cfg);
    assert_eq!(measurement.family, "Test");
    assert_eq!(measurement.pages, 1);
    assert_eq!(measurement.dark_pixels, 4 * renderer.pixels_per_glyph());
}

#[test]
fn measurement_is_deterministic() {
    let renderer = FixedAdvanceRenderer::new(10.0, 8, 8);
    let cfg = small_config();
    let text = "the quick brown fox jumps over the lazy dog";
    let first = measure_ink("Same", &renderer, text, &cfg);
    let second = measure_ink("Same", &renderer, text, &cfg);
    assert_eq!(first, second);
}

#[test]
fn ink_accumulates_across_pages() {
    let renderer = FixedAdvanceRenderer::new(10.0, 8, 8);
    // One line per page: usable height 10 px at 10 px line height.
    let cfg = LayoutConfig {
        page_height_px: 30,
        ..small_config()
    };
    assert_eq!(cfg.lines_per_page(), 1);
    let measurement = measure_ink("Multi", &renderer, "a\nb\nc", &cfg);
    assert_eq!(measurement.pages, 3);
    assert_eq!(measurement.dark_pixels, 3 * renderer.pixels_per_glyph());
}

#[test]
fn page_count_is_at_least_one_for_any_text() {
    let renderer = FixedAdvanceRenderer::new(10.0, 8, 8);
    let cfg = small_config();
    let measurement = measure_ink("Empty", &renderer, "", &cfg);
    assert_eq!(measurement.pages, 1);
    assert_eq!(measurement.dark_pixels, 0);
}

#[test]
fn zero_threshold_counts_nothing() {
    let renderer = FixedAdvanceRenderer::new(10.0, 8, 8);
    let cfg = LayoutConfig {
        darkness_threshold: 0,
        ..small_config()
    };
    let measurement = measure_ink("NoInk", &renderer, "abc", &cfg);
    assert_eq!(measurement.dark_pixels, 0);
}
