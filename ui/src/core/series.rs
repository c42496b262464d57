//! Table rows to chartable `(label, value)` series.
//!
//! Charts reuse whatever table feeds them instead of a second data path. The
//! label is the first cell; the value is the first later cell that reads as a
//! number; summary rows ("Total") and unlabeled rows never chart.

use super::table::Row;
use super::value::try_numeric;

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub label: String,
    pub value: f64,
}

/// Extracts one entry per chartable row, in row order.
///
/// A row's value comes from the first cell after the label whose canonical
/// text parses as a finite number; rows with no such cell chart as zero.
/// Group headers get no special treatment here, so a grouped table charts its
/// header rows too when they carry values.
pub fn extract_series(rows: &[Row]) -> Vec<SeriesEntry> {
    rows.iter()
        .filter_map(|row| {
            let label = row.cells.first()?.display.trim().to_string();
            if label.is_empty() || label.eq_ignore_ascii_case("total") {
                return None;
            }
            let value = row.cells[1..]
                .iter()
                .find_map(|cell| try_numeric(cell.sort_text()))
                .unwrap_or(0.0);
            Some(SeriesEntry { label, value })
        })
        .collect()
}
