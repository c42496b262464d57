//! Chart geometry computed from a series, independent of rendering.
//!
//! The pie builder emits ready-to-use SVG sector paths on a fixed 180x180
//! viewport; the bar builder emits relative widths against the series
//! maximum. Components only interpolate these values into markup, so every
//! visual decision (angles, arc flags, colors, percentages, hover text) is
//! testable right here.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::palette::color_at;
use super::series::SeriesEntry;

/// Which chart a table feeds. Declared where the dashboard is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
}

pub const PIE_SIZE: f64 = 180.0;
pub const PIE_CENTER: f64 = 90.0;
pub const PIE_RADIUS: f64 = 90.0;

/// Angular slack under a full turn treated as a full circle.
const FULL_TURN_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub color: &'static str,
    pub path: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub value: f64,
    /// Share of the total, already rounded to one decimal.
    pub percent: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieGeometry {
    pub slices: Vec<PieSlice>,
    pub legend: Vec<LegendItem>,
}

/// Builds pie sectors for the positive entries of a series.
///
/// Slices start at 12 o'clock and advance clockwise. Entries with a
/// non-positive value are dropped up front so slices and legend stay
/// index-aligned; with nothing positive left there is nothing to draw and
/// the result is `None`.
pub fn build_pie(series: &[SeriesEntry]) -> Option<PieGeometry> {
    let entries: Vec<&SeriesEntry> = series.iter().filter(|e| e.value > 0.0).collect();
    let total: f64 = entries.iter().map(|e| e.value).sum();
    if entries.is_empty() || total <= 0.0 {
        return None;
    }

    let mut slices = Vec::with_capacity(entries.len());
    let mut legend = Vec::with_capacity(entries.len());
    let mut cumulative = 0.0_f64;

    for (idx, entry) in entries.iter().enumerate() {
        let fraction = entry.value / total;
        let start = cumulative * TAU - FRAC_PI_2;
        cumulative += fraction;
        let end = cumulative * TAU - FRAC_PI_2;
        let color = color_at(idx);
        let percent = round1(fraction * 100.0);

        slices.push(PieSlice {
            label: entry.label.clone(),
            value: entry.value,
            fraction,
            color,
            path: sector_path(start, end),
            tooltip: hover_text(&entry.label, entry.value, percent),
        });
        legend.push(LegendItem {
            label: entry.label.clone(),
            value: entry.value,
            percent,
            color,
        });
    }

    Some(PieGeometry { slices, legend })
}

/// Wedge path between two angles, clockwise, using the large-arc flag only
/// past the half turn. A (near-)full turn degenerates as a wedge, so it is
/// drawn as two half-circle arcs instead.
fn sector_path(start: f64, end: f64) -> String {
    let c = PIE_CENTER;
    let r = PIE_RADIUS;
    if end - start >= TAU - FULL_TURN_EPSILON {
        let top = round2(c - r);
        let bottom = round2(c + r);
        return format!("M {c} {top} A {r} {r} 0 1 1 {c} {bottom} A {r} {r} 0 1 1 {c} {top} Z");
    }

    let (x1, y1) = point_at(start);
    let (x2, y2) = point_at(end);
    let large_arc = u8::from(end - start > TAU / 2.0);
    format!("M {c} {c} L {x1} {y1} A {r} {r} 0 {large_arc} 1 {x2} {y2} Z")
}

fn point_at(angle: f64) -> (f64, f64) {
    (
        round2(PIE_CENTER + PIE_RADIUS * angle.cos()),
        round2(PIE_CENTER + PIE_RADIUS * angle.sin()),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    /// Width relative to the series maximum, 100.0 for the largest bar.
    pub width_pct: f64,
    /// Share of the series total, unrounded.
    pub share_pct: f64,
    pub color: &'static str,
    pub tooltip: String,
}

/// Builds horizontal bars: widths relative to the maximum, shares relative
/// to the total. A zero or negative maximum yields zero widths; a zero total
/// falls back to 1 so shares stay defined.
pub fn build_bars(series: &[SeriesEntry]) -> Vec<BarGeometry> {
    let max = series.iter().map(|e| e.value).fold(0.0_f64, f64::max);
    let sum: f64 = series.iter().map(|e| e.value).sum();
    let total = if sum == 0.0 { 1.0 } else { sum };

    series
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let width_pct = if max > 0.0 {
                (entry.value / max * 100.0).max(0.0)
            } else {
                0.0
            };
            let share_pct = entry.value / total * 100.0;
            BarGeometry {
                label: entry.label.clone(),
                value: entry.value,
                width_pct,
                share_pct,
                color: color_at(idx),
                tooltip: hover_text(&entry.label, entry.value, round1(share_pct)),
            }
        })
        .collect()
}

fn hover_text(label: &str, value: f64, percent: f64) -> String {
    format!("{label} — {value} ({percent:.1}%)")
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(pairs: &[(&str, f64)]) -> Vec<SeriesEntry> {
        pairs
            .iter()
            .map(|(label, value)| SeriesEntry {
                label: (*label).to_string(),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn quarter_slice_path_is_exact() {
        let geometry = build_pie(&series(&[("EVI", 1.0), ("Downstream", 3.0)])).unwrap();
        assert_eq!(
            geometry.slices[0].path,
            "M 90 90 L 90 0 A 90 90 0 0 1 180 90 Z"
        );
    }

    #[test]
    fn first_slice_starts_at_twelve_oclock() {
        let geometry = build_pie(&series(&[("a", 1.0), ("b", 1.0)])).unwrap();
        assert!(geometry.slices[0].path.starts_with("M 90 90 L 90 0 "));
    }

    #[test]
    fn half_slice_uses_small_arc() {
        let geometry = build_pie(&series(&[("a", 2.0), ("b", 2.0)])).unwrap();
        for slice in &geometry.slices {
            assert!(slice.path.contains(" 0 0 1 "), "path {}", slice.path);
        }
    }

    #[test]
    fn majority_slice_uses_large_arc() {
        let geometry = build_pie(&series(&[("a", 3.0), ("b", 1.0)])).unwrap();
        assert!(geometry.slices[0].path.contains(" 0 1 1 "));
        assert!(geometry.slices[1].path.contains(" 0 0 1 "));
    }

    #[test]
    fn single_entry_draws_a_full_circle() {
        let geometry = build_pie(&series(&[("Lyon Confluence", 7.0)])).unwrap();
        assert_eq!(geometry.slices.len(), 1);
        assert_eq!(
            geometry.slices[0].path,
            "M 90 0 A 90 90 0 1 1 90 180 A 90 90 0 1 1 90 0 Z"
        );
        assert_eq!(geometry.legend[0].percent, 100.0);
    }

    #[test]
    fn empty_or_zero_series_build_nothing() {
        assert!(build_pie(&[]).is_none());
        assert!(build_pie(&series(&[("a", 0.0), ("b", 0.0)])).is_none());
    }

    #[test]
    fn non_positive_entries_are_skipped() {
        let geometry = build_pie(&series(&[("ghost", -5.0), ("real", 10.0)])).unwrap();
        assert_eq!(geometry.slices.len(), 1);
        assert_eq!(geometry.slices[0].label, "real");
        assert_eq!(geometry.legend.len(), 1);
    }

    #[test]
    fn fractions_sum_to_one() {
        let geometry = build_pie(&series(&[("a", 2.0), ("b", 3.0), ("c", 5.0)])).unwrap();
        let sum: f64 = geometry.slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn legend_percents_round_to_one_decimal() {
        let geometry = build_pie(&series(&[("a", 1.0), ("b", 2.0)])).unwrap();
        assert_eq!(geometry.legend[0].percent, 33.3);
        assert_eq!(geometry.legend[1].percent, 66.7);
    }

    #[test]
    fn slices_and_legend_share_colors() {
        let geometry = build_pie(&series(&[("a", 1.0), ("b", 1.0), ("c", 1.0)])).unwrap();
        for (slice, item) in geometry.slices.iter().zip(&geometry.legend) {
            assert_eq!(slice.color, item.color);
        }
        assert_ne!(geometry.slices[0].color, geometry.slices[1].color);
    }

    #[test]
    fn tooltip_carries_label_value_and_percent() {
        let geometry = build_pie(&series(&[("Lyon", 12.0), ("Annecy", 8.0)])).unwrap();
        assert_eq!(geometry.slices[0].tooltip, "Lyon — 12 (60.0%)");
    }

    #[test]
    fn largest_bar_is_exactly_full_width() {
        let bars = build_bars(&series(&[("Init", 10.0), ("Charge", 5.0), ("Fin", 0.0)]));
        assert_eq!(bars[0].width_pct, 100.0);
        assert_eq!(bars[1].width_pct, 50.0);
        assert_eq!(bars[2].width_pct, 0.0);
    }

    #[test]
    fn zero_series_keeps_widths_and_shares_at_zero() {
        let bars = build_bars(&series(&[("a", 0.0), ("b", 0.0)]));
        assert!(bars.iter().all(|b| b.width_pct == 0.0));
        assert!(bars.iter().all(|b| b.share_pct == 0.0));
    }

    #[test]
    fn bar_shares_sum_to_one_hundred() {
        let bars = build_bars(&series(&[("a", 2.0), ("b", 6.0)]));
        let sum: f64 = bars.iter().map(|b| b.share_pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(bars[1].tooltip, "b — 6 (75.0%)");
    }

    #[test]
    fn bars_keep_series_order_and_cycle_colors() {
        let entries = series(&[
            ("m1", 1.0),
            ("m2", 2.0),
            ("m3", 3.0),
            ("m4", 4.0),
            ("m5", 5.0),
            ("m6", 6.0),
            ("m7", 7.0),
            ("m8", 8.0),
            ("m9", 9.0),
        ]);
        let bars = build_bars(&entries);
        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["m1", "m2", "m3", "m4", "m5", "m6", "m7", "m8", "m9"]
        );
        assert_eq!(bars[0].color, bars[8].color);
    }

    #[test]
    fn empty_series_builds_no_bars() {
        assert!(build_bars(&[]).is_empty());
    }
}
