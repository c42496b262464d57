//! Embedded demo fleet.
//!
//! The dashboard is fed in memory; this fixture stands in for the live feed
//! and is sized so every chart and table has something to say (four sites,
//! every fault family, every lifecycle moment).

use once_cell::sync::Lazy;

use super::SessionRecord;

const DEMO_SESSIONS: &str = include_str!("../../assets/data/demo-sessions.json");

static SESSIONS: Lazy<Vec<SessionRecord>> =
    Lazy::new(|| serde_json::from_str(DEMO_SESSIONS).unwrap_or_default());

pub fn sessions() -> &'static [SessionRecord] {
    &SESSIONS
}
