//! Sort-key parsing for displayed cell text.
//!
//! Tables render human text ("12,5 %", "1 250", "Fin de charge") while sorting
//! and charting need machine values. Numeric parsing tolerates the locale
//! artifacts our tables produce: embedded whitespace (including non-breaking
//! spaces used as thousands separators), percent signs, and comma decimal
//! separators. Anything that still fails to parse sorts as zero rather than
//! poisoning a comparison.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// How a column's cells are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    #[default]
    Textual,
}

/// A parsed, comparable key for one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Total ordering over keys. Non-finite numbers never reach here (see
    /// [`try_numeric`]), but an incomparable pair still collapses to `Equal`
    /// instead of panicking. Mixed variants also compare as `Equal`; columns
    /// declare a single kind, so they do not arise in practice.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Parses cell text as a number, or `None` when it is not one.
///
/// Strips every whitespace character and `%`, then normalizes `,` to `.` so
/// French-formatted percentages ("12,5 %") parse like their plain
/// counterparts. The cleaned string must parse in full to a finite value.
pub fn try_numeric(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '%')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numeric key with the zero fallback sorting relies on.
pub fn numeric(text: &str) -> f64 {
    try_numeric(text).unwrap_or(0.0)
}

/// Textual key: trimmed and case-folded.
pub fn textual(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Builds the key for one cell according to its column's kind.
pub fn sort_key(text: &str, kind: ColumnKind) -> SortKey {
    match kind {
        ColumnKind::Numeric => SortKey::Number(numeric(text)),
        ColumnKind::Textual => SortKey::Text(textual(text)),
    }
}
