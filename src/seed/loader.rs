//! SeedLoader — sequential creation of the demo users and their records.
//!
//! For each spec in list order: sign up, classify any failure, then bulk
//! insert the nested appointments and prescriptions tagged with the new
//! identity id. A duplicate identity is the expected steady state of
//! re-running the pipeline and is skipped with a warning; any other failure
//! aborts the remaining pass immediately, with no rollback of users already
//! seeded in this run.
//!
//! Rows are only ever inserted for an identity created in the same pass, so
//! a `patient_id` can never point at an identity that failed creation.

use super::error::{SeedError, SignUpError};
use super::reporter::RunReporter;
use super::traits::{AuthGateway, RecordStore};
use super::types::{AppointmentRow, PrescriptionRow, SeedUserSpec};

pub struct SeedLoader<'a, A: AuthGateway, S: RecordStore> {
    auth: &'a A,
    store: &'a S,
}

impl<'a, A: AuthGateway, S: RecordStore> SeedLoader<'a, A, S> {
    pub fn new(auth: &'a A, store: &'a S) -> Self {
        Self { auth, store }
    }

    /// Process every spec in list order, strictly one at a time.
    pub async fn run(
        &self,
        specs: &[SeedUserSpec],
        reporter: &mut RunReporter,
    ) -> Result<(), SeedError> {
        for spec in specs {
            reporter.append(format!("Processing user: {} ({})", spec.name, spec.email));

            let created = self
                .auth
                .sign_up(&spec.email, &spec.password, &spec.name)
                .await;

            let patient_id = match created {
                Ok(Some(id)) => id,
                Ok(None) => return Err(SeedError::MissingIdentityId(spec.name.clone())),
                Err(SignUpError::AlreadyRegistered) => {
                    tracing::warn!(email = %spec.email, "seed user already exists, skipping");
                    reporter.append(format!(
                        "WARN: User {} already exists. Skipping creation.",
                        spec.email
                    ));
                    continue;
                }
                Err(SignUpError::Other(reason)) => {
                    return Err(SeedError::SignUp {
                        name: spec.name.clone(),
                        reason,
                    });
                }
            };

            reporter.append(format!(
                "Successfully created user account for {}.",
                spec.name
            ));

            reporter.append("Adding appointments...");
            let appointments: Vec<AppointmentRow> = spec
                .appointments
                .iter()
                .map(|a| AppointmentRow::from_spec(a, &patient_id))
                .collect();
            self.store
                .insert_appointments(&appointments)
                .await
                .map_err(|e| SeedError::Insert {
                    table: "appointments",
                    name: spec.name.clone(),
                    reason: e.to_string(),
                })?;

            reporter.append("Adding prescriptions...");
            let prescriptions: Vec<PrescriptionRow> = spec
                .prescriptions
                .iter()
                .map(|p| PrescriptionRow::from_spec(p, &patient_id))
                .collect();
            self.store
                .insert_prescriptions(&prescriptions)
                .await
                .map_err(|e| SeedError::Insert {
                    table: "prescriptions",
                    name: spec.name.clone(),
                    reason: e.to_string(),
                })?;

            reporter.append(format!("--- Finished processing {} ---", spec.name));
        }

        Ok(())
    }
}
