use dioxus::prelude::*;

use crate::core::format::format_percent;
use crate::sessions::{stats, SessionRecord};

/// Headline numbers for the current fleet window.
#[component]
pub fn OverviewHighlights(records: Vec<SessionRecord>) -> Element {
    let stats = stats(&records);
    let cards = [
        ("Sessions", stats.total.to_string(), "in range".to_string()),
        (
            "Completed",
            stats.completed.to_string(),
            "reached end of charge".to_string(),
        ),
        (
            "Errors",
            stats.errors.to_string(),
            "interrupted sessions".to_string(),
        ),
        (
            "Success rate",
            format_percent(stats.success_rate),
            "completed / total".to_string(),
        ),
    ];

    rsx! {
        section { class: "board-card",
            div { class: "board-card__header",
                h2 { "Highlights" }
            }
            div { class: "board-highlights",
                for (label, value, meta) in cards.iter() {
                    div { key: "{label}", class: "board-highlight",
                        span { class: "board-highlight__label", "{label}" }
                        span { class: "board-highlight__value", "{value}" }
                        span { class: "board-highlight__meta", "{meta}" }
                    }
                }
            }
        }
    }
}
