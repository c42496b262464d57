//! Builders that turn session records into the dashboard's tables.
//!
//! Each builder returns a plain `TableModel`; the charts then feed off the
//! same tables through series extraction, so a chart can never disagree
//! with the table next to it. Formatted cells (percentages, energies,
//! timestamps) carry canonical sort keys so interactive sorting ignores the
//! display locale.

use std::collections::BTreeMap;

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

use crate::core::format::{format_kwh, format_percent};
use crate::core::table::{Cell, Column, Row, TableModel};

use super::{ErrorKind, LifecycleMoment, SessionRecord};

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    total: usize,
    completed: usize,
}

impl Tally {
    fn add(&mut self, ok: bool) {
        self.total += 1;
        if ok {
            self.completed += 1;
        }
    }

    fn errors(&self) -> usize {
        self.total - self.completed
    }

    fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

fn count_cell(value: usize) -> Cell {
    Cell::new(value.to_string())
}

fn percent_cell(value: f64) -> Cell {
    Cell::with_sort_key(format_percent(value), value.to_string())
}

fn energy_cell(value: f64) -> Cell {
    Cell::with_sort_key(format_kwh(value), value.to_string())
}

fn datetime_cell(iso: &str) -> Cell {
    Cell::with_sort_key(format_datetime(iso), iso)
}

fn format_datetime(iso: &str) -> String {
    OffsetDateTime::parse(iso, &Rfc3339)
        .ok()
        .and_then(|date| {
            date.format(&format_description!(
                "[day] [month repr:short] [hour]:[minute]"
            ))
            .ok()
        })
        .unwrap_or_else(|| iso.to_string())
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn stat_columns(first: &str) -> Vec<Column> {
    vec![
        Column::textual(first),
        Column::numeric("Sessions"),
        Column::numeric("Completed"),
        Column::numeric("Errors"),
        Column::numeric("Success %"),
    ]
}

fn stat_cells(label_cell: Cell, tally: Tally) -> Vec<Cell> {
    vec![
        label_cell,
        count_cell(tally.total),
        count_cell(tally.completed),
        count_cell(tally.errors()),
        percent_cell(tally.rate()),
    ]
}

/// One row per site, worst offenders first. The sessions column is the
/// first numeric one, so this table feeds the per-site pie directly.
pub fn site_breakdown(records: &[SessionRecord]) -> TableModel {
    let mut sites: BTreeMap<&str, Tally> = BTreeMap::new();
    for record in records {
        sites.entry(record.site.as_str()).or_default().add(record.is_ok());
    }

    let mut ordered: Vec<(&str, Tally)> = sites.into_iter().collect();
    ordered.sort_by(|(site_a, tally_a), (site_b, tally_b)| {
        tally_b
            .errors()
            .cmp(&tally_a.errors())
            .then_with(|| site_a.cmp(site_b))
    });

    let rows = ordered
        .into_iter()
        .map(|(site, tally)| Row::plain(stat_cells(Cell::new(site), tally)))
        .collect();

    TableModel::new("site-breakdown", stat_columns("Site"), rows)
}

/// Two-level recap: a header row per site followed by one child row per
/// charge point, both keyed by the site name so sorting keeps them glued.
pub fn site_recap(records: &[SessionRecord]) -> TableModel {
    let mut sites: BTreeMap<&str, (Tally, BTreeMap<&str, Tally>)> = BTreeMap::new();
    for record in records {
        let site = sites.entry(record.site.as_str()).or_default();
        site.0.add(record.is_ok());
        site.1
            .entry(record.charge_point.as_str())
            .or_default()
            .add(record.is_ok());
    }

    let mut ordered: Vec<(&str, (Tally, BTreeMap<&str, Tally>))> = sites.into_iter().collect();
    ordered.sort_by(|(site_a, (tally_a, _)), (site_b, (tally_b, _))| {
        tally_b
            .errors()
            .cmp(&tally_a.errors())
            .then_with(|| site_a.cmp(site_b))
    });

    let mut rows = Vec::new();
    for (site, (tally, charge_points)) in ordered {
        rows.push(Row::group_header(
            stat_cells(Cell::new(format!("{site} (total)")), tally),
            site,
        ));

        let mut children: Vec<(&str, Tally)> = charge_points.into_iter().collect();
        children.sort_by(|(id_a, tally_a), (id_b, tally_b)| {
            tally_b
                .errors()
                .cmp(&tally_a.errors())
                .then_with(|| id_a.cmp(id_b))
        });
        for (charge_point, tally) in children {
            rows.push(Row::group_child(
                stat_cells(Cell::new(format!("↳ PDC {charge_point}")), tally),
                site,
            ));
        }
    }

    TableModel::new("site-recap", stat_columns("Site / PDC"), rows)
}

/// Error counts per lifecycle moment, in lifecycle order, with the summary
/// row the charts are expected to skip.
pub fn moment_breakdown(records: &[SessionRecord]) -> TableModel {
    let errors: Vec<&SessionRecord> = records.iter().filter(|r| !r.is_ok()).collect();

    let mut rows = Vec::new();
    for moment in LifecycleMoment::ALL {
        let count = errors.iter().filter(|r| r.moment() == moment).count();
        if count == 0 {
            continue;
        }
        rows.push(Row::plain(vec![
            Cell::new(moment.label()),
            count_cell(count),
            percent_cell(share(count, errors.len())),
        ]));
    }
    rows.push(total_row(errors.len()));

    TableModel::new(
        "moment-breakdown",
        vec![
            Column::textual("Moment"),
            Column::numeric("Errors"),
            Column::numeric("Share %"),
        ],
        rows,
    )
}

/// Error counts per fault family, plus the summary row.
pub fn error_kind_breakdown(records: &[SessionRecord]) -> TableModel {
    let errors: Vec<&SessionRecord> = records.iter().filter(|r| !r.is_ok()).collect();

    let mut rows = Vec::new();
    for kind in ErrorKind::ALL {
        let count = errors
            .iter()
            .filter(|r| r.error_kind() == Some(kind))
            .count();
        if count == 0 {
            continue;
        }
        rows.push(Row::plain(vec![
            Cell::new(kind.label()),
            count_cell(count),
            percent_cell(share(count, errors.len())),
        ]));
    }
    rows.push(total_row(errors.len()));

    TableModel::new(
        "error-kind-breakdown",
        vec![
            Column::textual("Error type"),
            Column::numeric("Errors"),
            Column::numeric("Share %"),
        ],
        rows,
    )
}

fn total_row(total: usize) -> Row {
    Row::plain(vec![
        Cell::new("Total"),
        count_cell(total),
        percent_cell(if total == 0 { 0.0 } else { 100.0 }),
    ])
}

/// Every error session, newest first, with canonical keys behind the
/// formatted timestamp and energy cells.
pub fn session_log(records: &[SessionRecord]) -> TableModel {
    let mut errors: Vec<&SessionRecord> = records.iter().filter(|r| !r.is_ok()).collect();
    // RFC 3339 UTC strings order chronologically as text.
    errors.sort_by(|a, b| b.started_at.cmp(&a.started_at));

    let rows = errors
        .into_iter()
        .map(|record| {
            Row::plain(vec![
                Cell::new(record.id.as_str()),
                datetime_cell(&record.started_at),
                datetime_cell(&record.ended_at),
                Cell::new(record.site.as_str()),
                Cell::new(record.charge_point.as_str()),
                Cell::new(record.vehicle.as_str()),
                Cell::new(record.moment().label()),
                Cell::new(record.error_kind().map(ErrorKind::label).unwrap_or("—")),
                energy_cell(record.energy_kwh),
                Cell::new(record.soc_display()),
            ])
        })
        .collect();

    TableModel::new(
        "session-log",
        vec![
            Column::textual("Session"),
            Column::textual("Start"),
            Column::textual("End"),
            Column::textual("Site"),
            Column::textual("PDC"),
            Column::textual("Vehicle"),
            Column::textual("Moment"),
            Column::textual("Error type"),
            Column::numeric("Energy (kWh)"),
            Column::textual("SOC").unsortable(),
        ],
        rows,
    )
}
