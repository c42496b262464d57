//! Click-to-sort over a `TableModel`.
//!
//! One engine instance lives behind each rendered table and remembers which
//! column was sorted last. Repeat clicks on that column toggle the
//! direction; a click anywhere else starts ascending on the new column.
//!
//! Flat tables sort every row. Grouped tables (site summary rows with their
//! charge-point children) sort only the header rows, then reattach each
//! header's children right below it so a group never tears apart. Children
//! whose key no header claims fall to the bottom, untouched.
//!
//! Sorting is stable in both directions: ties keep their built order, and
//! descending reverses the comparator rather than the rows.

use std::collections::HashMap;

use super::table::{Row, TableModel};
use super::value::{sort_key, ColumnKind, SortKey};

/// Children with no usable group key gather under this bucket.
const ORPHAN_KEY: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Last applied sort. `column: None` means the table still shows its built
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<usize>,
    pub direction: SortDirection,
}

impl SortState {
    /// Direction the next click on `column` produces: a repeat click flips
    /// the current direction, any other column starts ascending.
    pub fn next_direction(&self, column: usize) -> SortDirection {
        if self.column == Some(column) {
            self.direction.reverse()
        } else {
            SortDirection::Ascending
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortEngine {
    state: SortState,
}

impl SortEngine {
    pub fn state(&self) -> SortState {
        self.state
    }

    /// Applies the next sort for a click on `column` and returns the new
    /// state. Column indexes past the declared columns compare textually.
    pub fn activate(&mut self, table: &mut TableModel, column: usize) -> SortState {
        let direction = self.state.next_direction(column);
        let kind = table.column_kind(column);
        if table.is_grouped() {
            sort_grouped(&mut table.rows, column, kind, direction);
        } else {
            sort_flat(&mut table.rows, column, kind, direction);
        }
        self.state = SortState {
            column: Some(column),
            direction,
        };
        self.state
    }
}

fn decorate(rows: Vec<Row>, column: usize, kind: ColumnKind) -> Vec<(SortKey, Row)> {
    rows.into_iter()
        .map(|row| (sort_key(row.cell_text(column), kind), row))
        .collect()
}

fn sort_decorated(decorated: &mut [(SortKey, Row)], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => decorated.sort_by(|a, b| a.0.compare(&b.0)),
        SortDirection::Descending => decorated.sort_by(|a, b| b.0.compare(&a.0)),
    }
}

fn sort_flat(rows: &mut Vec<Row>, column: usize, kind: ColumnKind, direction: SortDirection) {
    let mut decorated = decorate(std::mem::take(rows), column, kind);
    sort_decorated(&mut decorated, direction);
    *rows = decorated.into_iter().map(|(_, row)| row).collect();
}

fn effective_key(row: &Row) -> &str {
    row.group_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .unwrap_or(ORPHAN_KEY)
}

fn sort_grouped(rows: &mut Vec<Row>, column: usize, kind: ColumnKind, direction: SortDirection) {
    let mut headers = Vec::new();
    let mut buckets: Vec<Vec<Row>> = Vec::new();
    let mut bucket_index: HashMap<String, usize> = HashMap::new();

    for row in std::mem::take(rows) {
        if row.is_group_header {
            headers.push(row);
        } else {
            let key = effective_key(&row).to_string();
            let slot = *bucket_index.entry(key).or_insert_with(|| {
                buckets.push(Vec::new());
                buckets.len() - 1
            });
            buckets[slot].push(row);
        }
    }

    let mut decorated = decorate(headers, column, kind);
    sort_decorated(&mut decorated, direction);

    let mut output = Vec::new();
    for (_, header) in decorated {
        // First header in sorted order claims the bucket for its key.
        let children = bucket_index
            .get(effective_key(&header))
            .map(|&slot| std::mem::take(&mut buckets[slot]))
            .unwrap_or_default();
        output.push(header);
        output.extend(children);
    }
    // Orphan buckets keep first-appearance order, rows keep built order.
    for bucket in buckets {
        output.extend(bucket);
    }
    *rows = output;
}
