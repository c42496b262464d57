//! Dashboard presentation: the cards the routed views compose, plus the
//! state glue that feeds them.

mod chart_card;
mod data_table;
mod highlights;

pub use chart_card::ChartCard;
pub use data_table::DataTable;
pub use highlights::OverviewHighlights;

use crate::sessions::{demo, SessionRecord};

/// Records the views render. Today this is the embedded demo fleet; a live
/// feed would slot in here without the views noticing.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub records: Vec<SessionRecord>,
}

impl DashboardState {
    pub fn load() -> Self {
        Self {
            records: demo::sessions().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_exposes_the_demo_fleet() {
        let state = DashboardState::load();
        assert!(!state.records.is_empty());
    }
}
