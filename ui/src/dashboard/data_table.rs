use dioxus::prelude::*;

use crate::core::sort::{SortDirection, SortEngine, SortState};
use crate::core::table::TableModel;

/// Sortable table card.
///
/// The widget owns a copy of the model so header clicks reorder rows
/// locally. Sort state lives and dies with the widget; parents swapping in
/// a different table should key the component by `table.id` so the new
/// table mounts unsorted.
#[component]
pub fn DataTable(table: TableModel, title: Option<String>) -> Element {
    let mut model = use_signal(|| table.clone());
    let mut engine = use_signal(SortEngine::default);

    let state = engine.read().state();
    let snapshot = model.read().clone();

    rsx! {
        section { class: "board-card table-card",
            if let Some(title) = title.as_ref() {
                div { class: "board-card__header",
                    h2 { "{title}" }
                }
            }

            if snapshot.rows.is_empty() {
                p { class: "board-card__placeholder", "No sessions in range." }
            } else {
                div { class: "table-card__scroll",
                    table { class: "data-table",
                        thead {
                            tr {
                                for (idx, column) in snapshot.columns.iter().enumerate() {
                                    {
                                        let sortable = column.sortable;
                                        rsx! {
                                            th {
                                                key: "{idx}",
                                                class: header_class(sortable, state, idx),
                                                onclick: move |_| {
                                                    if sortable {
                                                        model.with_mut(|table| {
                                                            engine.with_mut(|engine| {
                                                                engine.activate(table, idx);
                                                            });
                                                        });
                                                    }
                                                },
                                                "{column.title}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        tbody {
                            for (row_idx, row) in snapshot.rows.iter().enumerate() {
                                tr {
                                    key: "{row_idx}",
                                    class: row_class(row.is_group_header, row.group_key.is_some()),
                                    for cell in row.cells.iter() {
                                        td { "{cell.display}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn header_class(sortable: bool, state: SortState, idx: usize) -> String {
    let mut class = String::from("data-table__heading");
    if sortable {
        class.push_str(" sortable");
    }
    if state.column == Some(idx) {
        class.push_str(match state.direction {
            SortDirection::Ascending => " sorted-asc",
            SortDirection::Descending => " sorted-desc",
        });
    }
    class
}

fn row_class(is_group_header: bool, has_group_key: bool) -> &'static str {
    if is_group_header {
        "site-row"
    } else if has_group_key {
        "pdc-row"
    } else {
        ""
    }
}
