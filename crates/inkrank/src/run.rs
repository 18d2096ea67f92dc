//! Sequential run driver.
//!
//! One worker measures fonts one at a time in a stable order; progress
//! is surfaced as a lazy sequence of [`Progress`] events so a
//! presentation layer can observe the run without touching the
//! measurement state. Cancellation is coarse: stop iterating and take
//! whatever completed.

use std::collections::BTreeMap;

use crate::config::LayoutConfig;
use crate::input::order_with_baseline_first;
use crate::locate::ResolvedFont;
use crate::measure::{process_font, InkMeasurement};

/// Progress notification for one processed font. `index` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub index: usize,
    pub total: usize,
    pub family: String,
}

/// Lazy driver over a resolved font set. Each [`Iterator::next`] call
/// measures exactly one font (baseline first, then sorted order) and
/// yields its progress event; fonts whose measurement fails are simply
/// absent from the final map.
pub struct MeasureRun {
    queue: Vec<ResolvedFont>,
    text: String,
    cfg: LayoutConfig,
    results: BTreeMap<String, InkMeasurement>,
    next_index: usize,
}

impl MeasureRun {
    pub fn new(
        resolved: BTreeMap<String, ResolvedFont>,
        text: String,
        cfg: LayoutConfig,
        baseline: &str,
    ) -> Self {
        let names: Vec<String> = resolved.keys().cloned().collect();
        let queue = order_with_baseline_first(&names, baseline)
            .into_iter()
            .filter_map(|name| resolved.get(&name).cloned())
            .collect();
        Self {
            queue,
            text,
            cfg,
            results: BTreeMap::new(),
            next_index: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.queue.len()
    }

    /// Measurements completed so far; the full map once the iterator
    /// is drained, a partial one after a coarse cancel.
    pub fn into_results(self) -> BTreeMap<String, InkMeasurement> {
        self.results
    }

    /// Drain the whole queue and return the measurement map.
    pub fn run_to_end(mut self) -> BTreeMap<String, InkMeasurement> {
        while self.next().is_some() {}
        self.into_results()
    }
}

impl Iterator for MeasureRun {
    type Item = Progress;

    fn next(&mut self) -> Option<Progress> {
        let font = self.queue.get(self.next_index)?.clone();
        self.next_index += 1;
        if let Some(measurement) = process_font(&font, &self.text, &self.cfg) {
            self.results.insert(font.family.clone(), measurement);
        }
        Some(Progress {
            index: self.next_index,
            total: self.queue.len(),
            family: font.family,
        })
    }
}
