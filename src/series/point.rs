//! Series point - (timepoint, depth, series number) coordinate of one frame
//!
//! # Ordering
//!
//! Components are compared in priority order series number -> timepoint ->
//! depth. Within a component a present value sorts before an absent one.
//! Floats use their IEEE total order, so `Eq`, `Ord` and `Hash` agree
//! (`-0.0 != 0.0`, `NaN == NaN`).

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Unique combination of (timepoint, depth, series number), each optional
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timepoint: Option<f32>,
    pub depth: Option<f32>,
    pub series_number: Option<i32>,
}

impl SeriesPoint {
    pub fn new(timepoint: Option<f32>, depth: Option<f32>, series_number: Option<i32>) -> Self {
        Self {
            timepoint,
            depth,
            series_number,
        }
    }

    /// True when no coordinate is present (plain single-frame image)
    pub fn is_empty(&self) -> bool {
        self.timepoint.is_none() && self.depth.is_none() && self.series_number.is_none()
    }

    /// Human-readable label, e.g. `Time: 5.0 sec. Depth: 2.0`.
    ///
    /// Only present parts are included, always in Time, Depth, Series order.
    pub fn label(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if let Some(t) = self.timepoint {
            parts.push(format!("Time: {} sec", format_value(t)));
        }
        if let Some(z) = self.depth {
            parts.push(format!("Depth: {}", format_value(z)));
        }
        if let Some(s) = self.series_number {
            parts.push(format!("Series: {}", s));
        }
        parts.join(". ")
    }
}

/// Float with a mandatory fractional part: `5.0`, `2.5`, `0.1`
pub(crate) fn format_value(v: f32) -> String {
    format!("{:?}", v)
}

/// Present-before-absent comparison of one component
fn cmp_present_first<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Ord for SeriesPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_present_first(self.series_number, other.series_number, Ord::cmp)
            .then_with(|| cmp_present_first(self.timepoint, other.timepoint, f32::total_cmp))
            .then_with(|| cmp_present_first(self.depth, other.depth, f32::total_cmp))
    }
}

impl PartialOrd for SeriesPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SeriesPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SeriesPoint {}

impl Hash for SeriesPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // total_cmp equality == bit equality
        self.series_number.hash(state);
        self.timepoint.map(f32::to_bits).hash(state);
        self.depth.map(f32::to_bits).hash(state);
    }
}

impl fmt::Display for SeriesPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
