//! Pure dashboard core: table vocabulary, sort-key parsing, series
//! extraction, chart geometry, and interactive sorting. Nothing in this
//! module renders or depends on a platform.

pub mod charts;
pub mod format;
pub mod palette;
pub mod series;
pub mod sort;
pub mod table;
pub mod value;

pub use charts::{build_bars, build_pie, BarGeometry, ChartKind, LegendItem, PieGeometry, PieSlice};
pub use series::{extract_series, SeriesEntry};
pub use sort::{SortDirection, SortEngine, SortState};
pub use table::{Cell, Column, Row, TableModel};
pub use value::ColumnKind;
