use dioxus::prelude::*;

use crate::core::ChartKind;
use crate::dashboard::{ChartCard, DashboardState, DataTable};
use crate::sessions::tables;

#[component]
pub fn Errors() -> Element {
    let state = use_signal(DashboardState::load);
    let records = state.read().records.clone();

    rsx! {
        section { class: "page page-errors",
            h1 { "Error analysis" }
            p {
                "Every interrupted session in range, classified by fault origin and by the lifecycle moment where charging stopped."
            }

            div { class: "board-grid",
                ChartCard {
                    title: "Errors by type",
                    kind: ChartKind::Pie,
                    table: tables::error_kind_breakdown(&records),
                }
                ChartCard {
                    title: "Errors by lifecycle moment",
                    kind: ChartKind::Bar,
                    table: tables::moment_breakdown(&records),
                }
            }

            DataTable {
                title: "Error sessions",
                table: tables::session_log(&records),
            }
        }
    }
}
