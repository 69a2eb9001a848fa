//! HTTP collaborators for the hosted Supabase-style backend.
//!
//! Three thin clients, one per pipeline trait:
//! - `admin::SupabaseAdmin` — privileged GoTrue admin endpoints
//!   (IdentityDirectory)
//! - `auth::SupabaseAuth` — GoTrue sign-up/sign-out (AuthGateway)
//! - `rest::PostgrestStore` — PostgREST bulk inserts (RecordStore)
//!
//! Transport concerns stop here: the clients translate HTTP outcomes into
//! the pipeline's error taxonomy and nothing above this module ever sees a
//! status code. In particular, GoTrue's duplicate-identity response is
//! mapped to the structured `SignUpError::AlreadyRegistered` in this module
//! only.

pub mod admin;
pub mod auth;
pub mod error;
pub mod rest;

pub use admin::SupabaseAdmin;
pub use auth::SupabaseAuth;
pub use error::ApiError;
pub use rest::PostgrestStore;
