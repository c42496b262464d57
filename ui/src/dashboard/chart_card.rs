use dioxus::prelude::*;

use crate::core::charts::{build_bars, build_pie, BarGeometry, ChartKind, LegendItem, PIE_SIZE};
use crate::core::series::{extract_series, SeriesEntry};
use crate::core::table::TableModel;

/// One chart panel fed by a table.
///
/// The table → chart-kind pairing is fixed by the caller; everything visual
/// (angles, widths, colors, hover text) comes precomputed from the core
/// builders, so this component only interpolates values into markup.
#[component]
pub fn ChartCard(title: String, kind: ChartKind, table: TableModel) -> Element {
    let series = extract_series(&table.rows);
    let body = match kind {
        ChartKind::Pie => pie_body(&series),
        ChartKind::Bar => bars_body(&series),
    };

    rsx! {
        section { class: "board-card chart-card",
            div { class: "board-card__header",
                h2 { "{title}" }
            }
            {body}
        }
    }
}

fn pie_body(series: &[SeriesEntry]) -> Element {
    let Some(geometry) = build_pie(series) else {
        return rsx! {
            p { class: "board-card__placeholder", "Nothing to chart yet." }
        };
    };

    rsx! {
        div { class: "pie-figure",
            svg {
                class: "pie-chart",
                view_box: "0 0 {PIE_SIZE} {PIE_SIZE}",
                role: "img",
                for slice in geometry.slices.iter() {
                    path {
                        key: "{slice.label}",
                        d: "{slice.path}",
                        fill: "{slice.color}",
                        title { "{slice.tooltip}" }
                    }
                }
            }
            ul { class: "pie-legend",
                for item in geometry.legend.iter() {
                    li { key: "{item.label}",
                        span {
                            class: "pie-legend__swatch",
                            style: "background: {item.color};",
                            aria_hidden: "true",
                        }
                        span { class: "pie-legend__label", "{item.label}" }
                        span { class: "pie-legend__value", {legend_value(item)} }
                    }
                }
            }
        }
    }
}

fn bars_body(series: &[SeriesEntry]) -> Element {
    let bars = build_bars(series);
    if bars.is_empty() {
        return rsx! {
            p { class: "board-card__placeholder", "Nothing to chart yet." }
        };
    }

    rsx! {
        div { class: "bar-chart",
            for bar in bars.iter() {
                div { key: "{bar.label}", class: "bar-row", title: "{bar.tooltip}",
                    span { class: "bar-row__label", "{bar.label}" }
                    div { class: "bar-row__track",
                        div {
                            class: "bar-row__fill",
                            style: "width: {bar.width_pct}%; background: {bar.color};",
                        }
                    }
                    span { class: "bar-row__value", {bar_value(bar)} }
                }
            }
        }
    }
}

fn legend_value(item: &LegendItem) -> String {
    format!("{} · {:.1}%", item.value, item.percent)
}

fn bar_value(bar: &BarGeometry) -> String {
    format!("{} · {:.1}%", bar.value, bar.share_pct)
}
