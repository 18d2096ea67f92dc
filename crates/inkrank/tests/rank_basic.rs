use std::collections::BTreeMap;

use inkrank::measure::InkMeasurement;
use inkrank::rank::{compute_relative, rank_results};
use pretty_assertions::assert_eq;

fn measurements(entries: &[(&str, u64)]) -> BTreeMap<String, InkMeasurement> {
    entries
        .iter()
        .map(|&(family, dark_pixels)| {
            (
                family.to_string(),
                InkMeasurement {
                    family: family.to_string(),
                    dark_pixels,
                    pages: 1,
                },
            )
        })
        .collect()
}

#[test]
fn baseline_reads_exactly_one_hundred() {
    let results = measurements(&[("Arial", 4000), ("Georgia", 5000)]);
    let relative = compute_relative(&results, "Arial");
    assert_eq!(relative.get("Arial"), Some(&100.0));
    assert_eq!(relative.get("Georgia"), Some(&125.0));
}

#[test]
fn percentages_round_to_one_decimal() {
    let results = measurements(&[("Arial", 3000), ("Courier New", 1000)]);
    let relative = compute_relative(&results, "Arial");
    // 1000/3000 = 33.333... -> 33.3
    assert_eq!(relative.get("Courier New"), Some(&33.3));
}

#[test]
fn missing_baseline_yields_empty_relative_map() {
    let results = measurements(&[("Georgia", 5000), ("Verdana", 6000)]);
    let relative = compute_relative(&results, "Arial");
    assert!(relative.is_empty());
}

#[test]
fn zero_ink_baseline_suppresses_all_percentages() {
    let results = measurements(&[("Arial", 0), ("Georgia", 5000)]);
    let relative = compute_relative(&results, "Arial");
    assert!(relative.is_empty());
}

#[test]
fn rows_sort_ascending_by_ink_with_baseline_in_place() {
    let results = measurements(&[("Arial", 4000), ("Courier New", 2500), ("Georgia", 5000)]);
    let relative = compute_relative(&results, "Arial");
    let rows = rank_results(&results, &relative, "Arial");
    let order: Vec<&str> = rows.iter().map(|row| row.family.as_str()).collect();
    assert_eq!(order, vec!["Courier New", "Arial", "Georgia"]);
    assert!(rows[1].is_baseline);
    assert!(!rows[0].is_baseline && !rows[2].is_baseline);
}

#[test]
fn unresolved_baseline_keeps_raw_totals_with_sentinel_percentages() {
    let results = measurements(&[("Georgia", 5000), ("Verdana", 6000)]);
    let relative = compute_relative(&results, "Arial");
    let rows = rank_results(&results, &relative, "Arial");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.ink_vs_baseline.is_none()));
    assert_eq!(rows[0].dark_pixels, 5000);
    assert_eq!(rows[1].dark_pixels, 6000);
}

#[test]
fn equal_ink_breaks_ties_by_family_name() {
    let results = measurements(&[("Verdana", 3000), ("Georgia", 3000)]);
    let rows = rank_results(&results, &BTreeMap::new(), "Arial");
    let order: Vec<&str> = rows.iter().map(|row| row.family.as_str()).collect();
    assert_eq!(order, vec!["Georgia", "Verdana"]);
}
