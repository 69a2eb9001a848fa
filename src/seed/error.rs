//! Pipeline error types.
//!
//! Two enums with distinct roles: `SignUpError` classifies identity creation
//! at the collaborator boundary (structured, so the loader never has to
//! pattern-match free text), and `SeedError` is the fatal-failure taxonomy
//! that bubbles to the driver.

use thiserror::Error;

/// Structured classification of an identity-creation failure.
///
/// `AlreadyRegistered` is the expected steady state of re-running the
/// pipeline and must never abort a run; everything else is fatal.
#[derive(Error, Debug)]
pub enum SignUpError {
    #[error("User already registered")]
    AlreadyRegistered,

    #[error("{0}")]
    Other(String),
}

/// A fatal pipeline failure. Bubbles to the driver, which still clears the
/// session before reporting the run as failed.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The privileged identity listing failed. Without it no safe deletion
    /// can occur, so the reset pass never starts.
    #[error("Failed to list users: {0}")]
    Listing(String),

    #[error("Error signing up {name}: {reason}")]
    SignUp { name: String, reason: String },

    /// Creation succeeded but the response carried no usable identity id.
    #[error("User object not returned for {0} after sign up")]
    MissingIdentityId(String),

    #[error("Error adding {table} for {name}: {reason}")]
    Insert {
        table: &'static str,
        name: String,
        reason: String,
    },

    /// Transport-level failure from a collaborator call.
    #[error("{0}")]
    Transport(String),
}
