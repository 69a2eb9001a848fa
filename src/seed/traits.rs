//! Trait definitions for the reset-and-seed pipeline.
//!
//! Three traits define the collaborator boundaries:
//! - IdentityDirectory: privileged account listing + deletion
//! - AuthGateway: identity creation and session clearing
//! - RecordStore: bulk inserts into the clinical tables
//!
//! The pipeline holds concrete implementations via generics (static
//! dispatch); tests substitute in-memory mocks. Implementations surface
//! transport problems as `SeedError::Transport` — classification into the
//! fatal/skip taxonomy happens in the pipeline, not here. The one exception
//! is `sign_up`, which must distinguish the duplicate-identity case
//! structurally rather than leaving callers to sniff message text.

use super::error::{SeedError, SignUpError};
use super::types::{AppointmentRow, IdentitySummary, PrescriptionRow};

/// Privileged directory of existing identities.
#[allow(async_fn_in_trait)]
pub trait IdentityDirectory {
    /// Fetch the complete identity listing in one call.
    async fn list_identities(&self) -> Result<Vec<IdentitySummary>, SeedError>;

    /// Delete one identity by id. The storage layer cascades dependent
    /// appointment/prescription rows.
    async fn delete_identity(&self, id: &str) -> Result<(), SeedError>;
}

/// Identity creation and session clearing.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// Create an identity with the given credentials, storing `name` as
    /// profile metadata. Returns the new identity id, or `Ok(None)` when the
    /// gateway accepted the sign-up but the response carried no usable id
    /// (confirmation-pending flows); the loader treats that as fatal.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Option<String>, SignUpError>;

    /// Clear any active session. Idempotent; safe with no session at all.
    async fn sign_out(&self) -> Result<(), SeedError>;
}

/// Bulk writer for the clinical tables. Each insert is all-or-nothing.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn insert_appointments(&self, rows: &[AppointmentRow]) -> Result<(), SeedError>;

    async fn insert_prescriptions(&self, rows: &[PrescriptionRow]) -> Result<(), SeedError>;
}
