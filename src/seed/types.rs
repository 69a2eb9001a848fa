//! Core types for the reset-and-seed pipeline.
//!
//! These types model the full lifecycle:
//! Fixed dataset → Reset → Sign-up → Record insert → Run report.

use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ═══════════════════════════════════════════
// Demo user specs (input to the loader)
// ═══════════════════════════════════════════

/// A demo user to create, with nested records. The statically-defined list
/// of these is the single source of truth for what "the demo dataset" means;
/// list order is processing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedUserSpec {
    pub name: String,
    pub email: String,
    pub password: String,
    pub appointments: Vec<AppointmentSpec>,
    pub prescriptions: Vec<PrescriptionSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentSpec {
    pub provider: String,
    pub datetime: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionSpec {
    pub medication: String,
    pub dosage: String,
    pub quantity: u32,
    pub refill_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refill_schedule: Option<String>,
}

// ═══════════════════════════════════════════
// Persisted rows (output of the loader)
// ═══════════════════════════════════════════

/// An appointment row as written to the store: the spec fields plus the
/// `patient_id` foreign key. Written once, never updated or deleted here —
/// deletion rides on the storage layer's cascade when the identity goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRow {
    pub patient_id: String,
    pub provider: String,
    pub datetime: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,
}

impl AppointmentRow {
    pub fn from_spec(spec: &AppointmentSpec, patient_id: &str) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            provider: spec.provider.clone(),
            datetime: spec.datetime,
            repeat: spec.repeat.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionRow {
    pub patient_id: String,
    pub medication: String,
    pub dosage: String,
    pub quantity: u32,
    pub refill_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refill_schedule: Option<String>,
}

impl PrescriptionRow {
    pub fn from_spec(spec: &PrescriptionSpec, patient_id: &str) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            medication: spec.medication.clone(),
            dosage: spec.dosage.clone(),
            quantity: spec.quantity,
            refill_on: spec.refill_on,
            refill_schedule: spec.refill_schedule.clone(),
        }
    }
}

// ═══════════════════════════════════════════
// External identities (input to the reset pass)
// ═══════════════════════════════════════════

/// One entry from the privileged identity listing. The pipeline references
/// identities by their opaque id, never owns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentitySummary {
    pub id: String,
    pub email: String,
}

// ═══════════════════════════════════════════
// Run report (output of the driver)
// ═══════════════════════════════════════════

/// One time-stamped line of the run log.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}

/// Terminal outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Succeeded,
    Failed { error: String },
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Succeeded)
    }
}

/// Everything the invoker gets back: the terminal status and the full log,
/// returned whatever the outcome. No other state is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Correlates this invocation's tracing events with the returned log.
    pub run_id: Uuid,
    pub status: RunStatus,
    pub log: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn appt_spec() -> AppointmentSpec {
        AppointmentSpec {
            provider: "Dr Kim West".to_string(),
            datetime: DateTime::parse_from_rfc3339("2025-09-16T16:30:00-07:00").unwrap(),
            repeat: Some("weekly".to_string()),
        }
    }

    #[test]
    fn appointment_row_tagged_with_patient_id() {
        let row = AppointmentRow::from_spec(&appt_spec(), "u1");
        assert_eq!(row.patient_id, "u1");
        assert_eq!(row.provider, "Dr Kim West");
        assert_eq!(row.repeat.as_deref(), Some("weekly"));
    }

    #[test]
    fn absent_repeat_omitted_from_json() {
        let mut spec = appt_spec();
        spec.repeat = None;
        let row = AppointmentRow::from_spec(&spec, "u1");
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("repeat").is_none());
        assert_eq!(value["patient_id"], "u1");
    }

    #[test]
    fn datetime_serializes_as_rfc3339() {
        let row = AppointmentRow::from_spec(&appt_spec(), "u1");
        let value = serde_json::to_value(&row).unwrap();
        let datetime = value["datetime"].as_str().unwrap();
        assert!(datetime.starts_with("2025-09-16T16:30:00"));
    }

    #[test]
    fn prescription_row_carries_spec_fields() {
        let spec = PrescriptionSpec {
            medication: "Lexapro".to_string(),
            dosage: "5mg".to_string(),
            quantity: 2,
            refill_on: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            refill_schedule: Some("monthly".to_string()),
        };
        let row = PrescriptionRow::from_spec(&spec, "u2");
        assert_eq!(row.patient_id, "u2");
        assert_eq!(row.medication, "Lexapro");
        assert_eq!(row.quantity, 2);
    }

    #[test]
    fn log_entry_display_has_time_prefix() {
        let entry = LogEntry {
            timestamp: Local.with_ymd_and_hms(2025, 9, 16, 10, 30, 5).unwrap(),
            message: "hello".to_string(),
        };
        assert_eq!(entry.to_string(), "[10:30:05] hello");
    }

    #[test]
    fn run_status_success_predicate() {
        assert!(RunStatus::Succeeded.is_success());
        assert!(!RunStatus::Failed { error: "boom".to_string() }.is_success());
    }
}
