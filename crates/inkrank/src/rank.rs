//! Ranking Normalizer: express every font's ink total as a percentage
//! of the baseline font's total.

use std::collections::BTreeMap;

use crate::measure::InkMeasurement;

/// One row of the ranked output. `ink_vs_baseline` is `None` (the "—"
/// sentinel downstream) whenever the baseline has no usable
/// measurement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedResult {
    pub family: String,
    pub dark_pixels: u64,
    pub ink_vs_baseline: Option<f64>,
    pub is_baseline: bool,
}

/// Percentage of the baseline's ink for every measured font, rounded
/// to one decimal (the baseline itself reads 100.0).
///
/// Returns an empty map when the baseline is unmeasured or measured at
/// zero ink; zero is deliberately treated as "no baseline" rather than
/// dividing by it.
pub fn compute_relative(
    measurements: &BTreeMap<String, InkMeasurement>,
    baseline: &str,
) -> BTreeMap<String, f64> {
    let base_ink = measurements
        .get(baseline)
        .map(|measurement| measurement.dark_pixels)
        .unwrap_or(0);
    if base_ink == 0 {
        return BTreeMap::new();
    }
    measurements
        .iter()
        .map(|(family, measurement)| {
            let pct = measurement.dark_pixels as f64 / base_ink as f64 * 100.0;
            (family.clone(), (pct * 10.0).round() / 10.0)
        })
        .collect()
}

/// Rows sorted ascending by raw ink total (least ink first, family
/// name as tiebreak). The baseline is flagged but gets no special sort
/// placement.
pub fn rank_results(
    measurements: &BTreeMap<String, InkMeasurement>,
    relative: &BTreeMap<String, f64>,
    baseline: &str,
) -> Vec<RankedResult> {
    let mut rows: Vec<RankedResult> = measurements
        .values()
        .map(|measurement| RankedResult {
            family: measurement.family.clone(),
            dark_pixels: measurement.dark_pixels,
            ink_vs_baseline: relative.get(&measurement.family).copied(),
            is_baseline: measurement.family == baseline,
        })
        .collect();
    rows.sort_by(|a, b| {
        a.dark_pixels
            .cmp(&b.dark_pixels)
            .then_with(|| a.family.cmp(&b.family))
    });
    rows
}
