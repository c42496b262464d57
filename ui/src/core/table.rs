//! The in-memory table the dashboard sorts and charts.
//!
//! A `TableModel` is plain data: columns declare how their cells compare,
//! cells split display text from an optional canonical sort value, and rows
//! carry the two-level grouping markers (site header vs charge-point child)
//! the sort engine preserves. Builders in `sessions::tables` produce these;
//! nothing in here knows about charging sessions.

use serde::{Deserialize, Serialize};

use super::value::ColumnKind;

/// One rendered cell. `sort_key` is the canonical machine value behind a
/// locale-formatted display ("97,5 %" displays, "97.5" sorts; a timestamp
/// displays short and sorts RFC 3339). Absent, the display text is the key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
}

impl Cell {
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            sort_key: None,
        }
    }

    pub fn with_sort_key(display: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            sort_key: Some(sort_key.into()),
        }
    }

    /// Text comparisons and extraction operate on.
    pub fn sort_text(&self) -> &str {
        self.sort_key.as_deref().unwrap_or(&self.display)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    pub kind: ColumnKind,
    pub sortable: bool,
}

impl Column {
    pub fn numeric(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ColumnKind::Numeric,
            sortable: true,
        }
    }

    pub fn textual(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: ColumnKind::Textual,
            sortable: true,
        }
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub is_group_header: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_key: Option<String>,
}

impl Row {
    pub fn plain(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            is_group_header: false,
            group_key: None,
        }
    }

    pub fn group_header(cells: Vec<Cell>, key: impl Into<String>) -> Self {
        Self {
            cells,
            is_group_header: true,
            group_key: Some(key.into()),
        }
    }

    pub fn group_child(cells: Vec<Cell>, key: impl Into<String>) -> Self {
        Self {
            cells,
            is_group_header: false,
            group_key: Some(key.into()),
        }
    }

    /// Sort text of the cell at `idx`, or empty when the row is ragged.
    pub fn cell_text(&self, idx: usize) -> &str {
        self.cells.get(idx).map(Cell::sort_text).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableModel {
    /// Stable identity; parents key the table widget on it when swapping
    /// tables so the replacement mounts with fresh sort state.
    pub id: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl TableModel {
    pub fn new(id: impl Into<String>, columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            id: id.into(),
            columns,
            rows,
        }
    }

    /// Grouped tables sort headers and reattach children; flat tables sort
    /// every row.
    pub fn is_grouped(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.is_group_header || row.group_key.is_some())
    }

    pub fn column_kind(&self, idx: usize) -> ColumnKind {
        self.columns.get(idx).map(|c| c.kind).unwrap_or_default()
    }
}
