use std::collections::BTreeMap;

use inkrank::RankedResult;
use serde::Serialize;
use serde_json::{json, Value};

/// Sentinel for fonts with no baseline-relative percentage.
pub const NO_BASELINE: &str = "\u{2014}";

#[derive(Serialize)]
struct JsonEntry {
    dark_pixels: u64,
    ink_vs_baseline: Value,
}

/// Results object keyed by family name, plus the wall-clock scan time.
pub fn results_to_json(rows: &[RankedResult], scan_time: &str) -> Value {
    let mut entries: BTreeMap<&str, JsonEntry> = BTreeMap::new();
    for row in rows {
        entries.insert(
            row.family.as_str(),
            JsonEntry {
                dark_pixels: row.dark_pixels,
                ink_vs_baseline: row
                    .ink_vs_baseline
                    .map_or_else(|| Value::from(NO_BASELINE), Value::from),
            },
        );
    }
    let mut value = json!(entries);
    if let Some(object) = value.as_object_mut() {
        object.insert("scan_time".to_string(), Value::from(scan_time));
    }
    value
}

/// Plain-text ranking table: Font / Dark Pixels / vs Baseline (%),
/// rows already sorted ascending by dark pixel count.
pub fn render_table(rows: &[RankedResult], baseline: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<35} {:>12} {:>15}\n",
        "Font",
        "Dark Pixels",
        format!("vs {baseline} (%)")
    ));
    out.push_str(&"-".repeat(64));
    out.push('\n');
    for row in rows {
        let relative = row
            .ink_vs_baseline
            .map_or_else(|| NO_BASELINE.to_string(), |pct| format!("{pct:.1}"));
        let marker = if row.is_baseline { "  <-- baseline" } else { "" };
        out.push_str(&format!(
            "{:<35} {:>12} {:>15}{marker}\n",
            row.family, row.dark_pixels, relative
        ));
    }
    out
}
