//! PostgREST bulk-insert client for the clinical tables.
//!
//! Each call posts one JSON array; PostgREST applies it atomically, so a
//! failed insert leaves nothing behind from that call. Uses the service
//! role key: the pipeline writes fixtures, it does not impersonate the
//! demo users.

use serde::Serialize;

use super::error::ApiError;
use crate::config::SeedConfig;
use crate::seed::error::SeedError;
use crate::seed::traits::RecordStore;
use crate::seed::types::{AppointmentRow, PrescriptionRow};

pub struct PostgrestStore {
    base_url: String,
    service_role_key: String,
    client: reqwest::Client,
}

impl PostgrestStore {
    pub fn new(config: &SeedConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            service_role_key: config.service_role_key.clone(),
            client: reqwest::Client::new(),
        }
    }

    async fn insert<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<(), SeedError> {
        if rows.is_empty() {
            return Ok(());
        }

        let response = self
            .client
            .post(format!("{}/rest/v1/{table}", self.base_url))
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await
            .map_err(ApiError::Http)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(ApiError::Status {
            service: "postgrest",
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        }
        .into())
    }
}

impl RecordStore for PostgrestStore {
    async fn insert_appointments(&self, rows: &[AppointmentRow]) -> Result<(), SeedError> {
        self.insert("appointments", rows).await
    }

    async fn insert_prescriptions(&self, rows: &[PrescriptionRow]) -> Result<(), SeedError> {
        self.insert("prescriptions", rows).await
    }
}
