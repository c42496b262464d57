//! Charging-session domain model.
//!
//! One `SessionRecord` per charge attempt, as the charger fleet reports
//! them: which site and charge point, when, how much energy moved, and for
//! failed sessions the raw controller diagnostics (EVI step counter plus
//! EVI/downstream error codes). The methods here turn those raw codes into
//! the two axes the dashboard charts: what kind of fault, and at which
//! lifecycle moment the session died.

pub mod demo;
pub mod tables;

use serde::{Deserialize, Serialize};

/// Downstream code the EVI reports when the fault is actually its own.
const DOWNSTREAM_SELF_CODE: i64 = 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub site: String,
    pub charge_point: String,
    /// RFC 3339; kept as given so display formatting stays a view concern.
    pub started_at: String,
    pub ended_at: String,
    pub energy_kwh: f64,
    pub soc_start: u8,
    pub soc_end: u8,
    pub vehicle: String,
    /// 0 = completed, 1 = ended in error.
    pub state: u8,
    #[serde(default)]
    pub evi_step: Option<i64>,
    #[serde(default)]
    pub evi_code: i64,
    #[serde(default)]
    pub downstream_code: i64,
}

impl SessionRecord {
    pub fn is_ok(&self) -> bool {
        self.state == 0
    }

    /// Fault family for an error session, `None` for a completed one.
    ///
    /// The EVI flags its own faults either directly (nonzero EVI code, no
    /// downstream code) or through the reserved downstream self code; any
    /// other nonzero downstream code points at downstream equipment.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        if self.is_ok() {
            return None;
        }
        let kind = if self.downstream_code == DOWNSTREAM_SELF_CODE
            || (self.downstream_code == 0 && self.evi_code != 0)
        {
            ErrorKind::Evi
        } else if self.downstream_code != 0 {
            ErrorKind::Downstream
        } else {
            ErrorKind::Unclassified
        };
        Some(kind)
    }

    pub fn moment(&self) -> LifecycleMoment {
        match self.evi_step {
            Some(step) => LifecycleMoment::from_evi_step(step),
            None => LifecycleMoment::Unknown,
        }
    }

    pub fn soc_display(&self) -> String {
        format!("{}% → {}%", self.soc_start, self.soc_end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Evi,
    Downstream,
    Unclassified,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 3] = [ErrorKind::Evi, ErrorKind::Downstream, ErrorKind::Unclassified];

    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Evi => "EVI",
            ErrorKind::Downstream => "Downstream",
            ErrorKind::Unclassified => "Unclassified",
        }
    }
}

/// Phase a session was in when it ended, recovered from the EVI step
/// counter. Variants are declared in lifecycle order and sort that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LifecycleMoment {
    Init,
    LockConnector,
    CableCheck,
    Charge,
    EndOfCharge,
    Unknown,
}

impl LifecycleMoment {
    pub const ALL: [LifecycleMoment; 6] = [
        LifecycleMoment::Init,
        LifecycleMoment::LockConnector,
        LifecycleMoment::CableCheck,
        LifecycleMoment::Charge,
        LifecycleMoment::EndOfCharge,
        LifecycleMoment::Unknown,
    ];

    /// Maps the controller step counter to the phase it belongs to. Step 0
    /// means the controller already wound down, so it reads as end of
    /// charge, same as any step past the charging loop. Step 3 has no phase
    /// in the controller's step table and reads as unknown.
    pub fn from_evi_step(step: i64) -> Self {
        match step {
            0 => LifecycleMoment::EndOfCharge,
            1..=2 => LifecycleMoment::Init,
            4..=6 => LifecycleMoment::LockConnector,
            7 => LifecycleMoment::CableCheck,
            8 => LifecycleMoment::Charge,
            s if s > 8 => LifecycleMoment::EndOfCharge,
            _ => LifecycleMoment::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LifecycleMoment::Init => "Init",
            LifecycleMoment::LockConnector => "Lock Connector",
            LifecycleMoment::CableCheck => "CableCheck",
            LifecycleMoment::Charge => "Charge",
            LifecycleMoment::EndOfCharge => "Fin de charge",
            LifecycleMoment::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionStats {
    pub total: usize,
    pub completed: usize,
    pub errors: usize,
    /// Percent of sessions that completed, rounded to one decimal.
    pub success_rate: f64,
}

pub fn stats(records: &[SessionRecord]) -> SessionStats {
    let total = records.len();
    let completed = records.iter().filter(|r| r.is_ok()).count();
    let errors = total - completed;
    let success_rate = if total == 0 {
        0.0
    } else {
        (completed as f64 / total as f64 * 1000.0).round() / 10.0
    };
    SessionStats {
        total,
        completed,
        errors,
        success_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn record(site: &str, charge_point: &str, state: u8) -> SessionRecord {
        SessionRecord {
            id: format!("s-{site}-{charge_point}-{state}"),
            site: site.to_string(),
            charge_point: charge_point.to_string(),
            started_at: "2025-06-12T14:30:00Z".to_string(),
            ended_at: "2025-06-12T15:10:00Z".to_string(),
            energy_kwh: 7.4,
            soc_start: 20,
            soc_end: 80,
            vehicle: "Zoe".to_string(),
            state,
            evi_step: None,
            evi_code: 0,
            downstream_code: 0,
        }
    }

    #[test]
    fn completed_sessions_have_no_error_kind() {
        assert_eq!(record("Lyon", "1", 0).error_kind(), None);
    }

    #[test]
    fn downstream_self_code_reads_as_evi_fault() {
        let mut session = record("Lyon", "1", 1);
        session.downstream_code = 8192;
        session.evi_code = 0;
        assert_eq!(session.error_kind(), Some(ErrorKind::Evi));
    }

    #[test]
    fn nonzero_downstream_code_reads_as_downstream_fault() {
        let mut session = record("Lyon", "1", 1);
        session.downstream_code = 512;
        session.evi_code = 77;
        assert_eq!(session.error_kind(), Some(ErrorKind::Downstream));
    }

    #[test]
    fn evi_code_alone_reads_as_evi_fault() {
        let mut session = record("Lyon", "1", 1);
        session.evi_code = 33;
        assert_eq!(session.error_kind(), Some(ErrorKind::Evi));
    }

    #[test]
    fn codeless_errors_stay_unclassified() {
        assert_eq!(record("Lyon", "1", 1).error_kind(), Some(ErrorKind::Unclassified));
    }

    #[test]
    fn evi_steps_map_to_lifecycle_moments() {
        let cases = [
            (0, LifecycleMoment::EndOfCharge),
            (1, LifecycleMoment::Init),
            (2, LifecycleMoment::Init),
            // The controller's step table skips 3.
            (3, LifecycleMoment::Unknown),
            (4, LifecycleMoment::LockConnector),
            (6, LifecycleMoment::LockConnector),
            (7, LifecycleMoment::CableCheck),
            (8, LifecycleMoment::Charge),
            (9, LifecycleMoment::EndOfCharge),
            (40, LifecycleMoment::EndOfCharge),
            (-1, LifecycleMoment::Unknown),
        ];
        for (step, expected) in cases {
            assert_eq!(LifecycleMoment::from_evi_step(step), expected, "step {step}");
        }
    }

    #[test]
    fn missing_step_is_unknown() {
        assert_eq!(record("Lyon", "1", 1).moment(), LifecycleMoment::Unknown);
    }

    #[test]
    fn stats_round_success_rate_to_one_decimal() {
        let records = vec![
            record("Lyon", "1", 0),
            record("Lyon", "2", 0),
            record("Annecy", "1", 1),
        ];
        let stats = stats(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.success_rate, 66.7);
    }

    #[test]
    fn stats_on_nothing_are_zero() {
        assert_eq!(stats(&[]), SessionStats::default());
    }

    #[test]
    fn soc_display_shows_the_evolution() {
        assert_eq!(record("Lyon", "1", 0).soc_display(), "20% → 80%");
    }

    #[test]
    fn records_round_trip_through_json() {
        let session = record("Lyon", "1", 1);
        let json = serde_json::to_string(&session).unwrap();
        let back: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn diagnostic_fields_default_when_absent() {
        let json = r#"{
            "id": "s-1",
            "site": "Lyon Confluence",
            "charge_point": "2",
            "started_at": "2025-06-12T14:30:00Z",
            "ended_at": "2025-06-12T15:10:00Z",
            "energy_kwh": 12.0,
            "soc_start": 30,
            "soc_end": 90,
            "vehicle": "e-208",
            "state": 0
        }"#;
        let session: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(session.evi_step, None);
        assert_eq!(session.evi_code, 0);
        assert_eq!(session.downstream_code, 0);
    }
}
