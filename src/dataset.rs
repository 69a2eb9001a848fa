//! The fixed demo dataset.
//!
//! Two demo patients, each with two appointments and two prescriptions.
//! This list is the single source of truth for what "the demo dataset"
//! means; its order determines seeding order. The pipeline is not
//! parameterized for other schemas or volumes.

use chrono::{DateTime, NaiveDate};

use crate::seed::types::{AppointmentSpec, PrescriptionSpec, SeedUserSpec};

/// Shared password for every demo account. Demo fixtures only.
pub const SEED_PASSWORD: &str = "Password123!";

/// The full demo dataset, in seeding order.
pub fn demo_users() -> Vec<SeedUserSpec> {
    vec![
        SeedUserSpec {
            name: "Mark Johnson".to_string(),
            email: "mark@some-email-provider.net".to_string(),
            password: SEED_PASSWORD.to_string(),
            appointments: vec![
                appointment("Dr Kim West", "2025-09-16T16:30:00-07:00", "weekly"),
                appointment("Dr Lin James", "2025-09-19T18:30:00-07:00", "monthly"),
            ],
            prescriptions: vec![
                prescription("Lexapro", "5mg", 2, "2025-10-05", "monthly"),
                prescription("Ozempic", "1mg", 1, "2025-10-10", "monthly"),
            ],
        },
        SeedUserSpec {
            name: "Lisa Smith".to_string(),
            email: "lisa@some-email-provider.net".to_string(),
            password: SEED_PASSWORD.to_string(),
            appointments: vec![
                appointment("Dr Sally Field", "2025-09-22T18:15:00-07:00", "monthly"),
                appointment("Dr Lin James", "2025-09-25T20:00:00-07:00", "weekly"),
            ],
            prescriptions: vec![
                prescription("Metformin", "500mg", 2, "2025-10-15", "monthly"),
                prescription("Diovan", "100mg", 1, "2025-10-25", "monthly"),
            ],
        },
    ]
}

/// Target email set for the reset pass, derived from the dataset itself.
pub fn demo_emails(specs: &[SeedUserSpec]) -> Vec<String> {
    specs.iter().map(|s| s.email.clone()).collect()
}

fn appointment(provider: &str, datetime: &str, repeat: &str) -> AppointmentSpec {
    AppointmentSpec {
        provider: provider.to_string(),
        datetime: DateTime::parse_from_rfc3339(datetime)
            .expect("fixed dataset datetime is valid RFC 3339"),
        repeat: Some(repeat.to_string()),
    }
}

fn prescription(
    medication: &str,
    dosage: &str,
    quantity: u32,
    refill_on: &str,
    refill_schedule: &str,
) -> PrescriptionSpec {
    PrescriptionSpec {
        medication: medication.to_string(),
        dosage: dosage.to_string(),
        quantity,
        refill_on: refill_on
            .parse::<NaiveDate>()
            .expect("fixed dataset date is valid ISO 8601"),
        refill_schedule: Some(refill_schedule.to_string()),
    }
}
