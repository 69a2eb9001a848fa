//! Reset-and-seed pipeline for the CareLog demo dataset.
//!
//! Three components connected by collaborator traits:
//! ```text
//! Driver → ResetCoordinator → SeedLoader → session clear → RunReport
//! ```
//!
//! The reset pass is best-effort (individual deletion failures are logged and
//! skipped); the seed pass is fail-fast except for the one expected failure,
//! a duplicate identity, which is the steady state of re-running the
//! pipeline. Every step appends to a shared run log that is returned to the
//! invoker whatever the outcome.
//!
//! All external calls are awaited one at a time. Sequencing is a correctness
//! requirement: log lines must appear in causal order, and no record may
//! reference an identity id from a different, still-in-flight user.

pub mod driver;
pub mod error;
pub mod loader;
pub mod reporter;
pub mod reset;
pub mod traits;
pub mod types;

pub use driver::{RunPhase, SeedPipeline};
pub use error::{SeedError, SignUpError};
pub use loader::SeedLoader;
pub use reporter::RunReporter;
pub use reset::ResetCoordinator;
pub use traits::{AuthGateway, IdentityDirectory, RecordStore};
pub use types::*;
