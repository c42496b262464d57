use dioxus::prelude::*;

use crate::core::ChartKind;
use crate::dashboard::{ChartCard, DashboardState, DataTable, OverviewHighlights};
use crate::sessions::tables;

#[component]
pub fn Overview() -> Element {
    let state = use_signal(DashboardState::load);
    let records = state.read().records.clone();

    rsx! {
        section { class: "page page-overview",
            h1 { "Fleet overview" }
            p {
                "Charging activity across every site in the fleet: who charges where, how sessions end, and which locations need attention."
            }

            OverviewHighlights { records: records.clone() }

            div { class: "board-grid",
                ChartCard {
                    title: "Sessions by site",
                    kind: ChartKind::Pie,
                    table: tables::site_breakdown(&records),
                }
                ChartCard {
                    title: "Errors by lifecycle moment",
                    kind: ChartKind::Bar,
                    table: tables::moment_breakdown(&records),
                }
            }

            DataTable {
                title: "Sites and charge points",
                table: tables::site_recap(&records),
            }
        }
    }
}
