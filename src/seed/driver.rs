//! SeedPipeline — the single-shot driver over both passes.
//!
//! Explicit state machine instead of exceptions-as-control-flow:
//! ```text
//! Idle → Resetting → Seeding → ClearingSession → {Succeeded | Failed}
//! ```
//! A listing failure skips the Seeding phase; every other fatal failure
//! surfaces out of its pass. Session clearing is unconditional on all paths
//! (it is idempotent), so no demo session is ever left dangling. Both
//! terminal states are final; re-running builds a fresh log from `Idle`.

use std::collections::HashSet;

use uuid::Uuid;

use super::error::SeedError;
use super::loader::SeedLoader;
use super::reporter::RunReporter;
use super::reset::ResetCoordinator;
use super::traits::{AuthGateway, IdentityDirectory, RecordStore};
use super::types::{RunReport, RunStatus, SeedUserSpec};

/// Phases of a single pipeline invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Resetting,
    Seeding,
    ClearingSession,
    Succeeded,
    Failed,
}

fn advance(phase: &mut RunPhase, next: RunPhase) {
    tracing::debug!(from = ?phase, to = ?next, "run phase transition");
    *phase = next;
}

/// Drives one reset-and-seed run over the three collaborators.
pub struct SeedPipeline<D, A, S> {
    directory: D,
    auth: A,
    store: S,
}

impl<D, A, S> SeedPipeline<D, A, S>
where
    D: IdentityDirectory,
    A: AuthGateway,
    S: RecordStore,
{
    pub fn new(directory: D, auth: A, store: S) -> Self {
        Self {
            directory,
            auth,
            store,
        }
    }

    /// Run the full pipeline once: reset, seed, clear session, report.
    ///
    /// The returned report carries the complete log whatever the outcome.
    /// Never returns `Err` — fatal failures are folded into the report so
    /// the invoker always sees the log that led up to them.
    pub async fn run_seed(
        &self,
        target_emails: &[String],
        specs: &[SeedUserSpec],
    ) -> RunReport {
        let run_id = Uuid::new_v4();
        tracing::debug!(%run_id, "starting reset-and-seed run");
        let mut reporter = RunReporter::new();
        let mut phase = RunPhase::Idle;
        let mut fatal: Option<SeedError> = None;

        advance(&mut phase, RunPhase::Resetting);
        reporter.append("Seeding process started...");
        reporter.append("Attempting to reset previous seed data...");
        let targets: HashSet<String> = target_emails.iter().cloned().collect();
        match ResetCoordinator::new(&self.directory)
            .run(&targets, &mut reporter)
            .await
        {
            Ok(()) => reporter.append("Reset step completed."),
            Err(e) => fatal = Some(e),
        }

        // A listing failure skips seeding entirely; per-identity deletion
        // failures inside the reset pass never block this transition.
        if fatal.is_none() {
            advance(&mut phase, RunPhase::Seeding);
            reporter.append("Creating new seed data...");
            if let Err(e) = SeedLoader::new(&self.auth, &self.store)
                .run(specs, &mut reporter)
                .await
            {
                fatal = Some(e);
            }
        }

        advance(&mut phase, RunPhase::ClearingSession);
        reporter.append("Signing out to clear session...");
        if let Err(e) = self.auth.sign_out().await {
            // Sign-out is idempotent and advisory; a failure here must not
            // change the outcome of an otherwise clean run.
            tracing::warn!(error = %e, "session clear failed");
            reporter.append(format!("Failed to clear session: {e}"));
        }

        let status = match fatal {
            None => {
                advance(&mut phase, RunPhase::Succeeded);
                reporter.append("Seeding process completed successfully!");
                RunStatus::Succeeded
            }
            Some(e) => {
                advance(&mut phase, RunPhase::Failed);
                let error = e.to_string();
                tracing::error!(%error, "seeding run failed");
                reporter.append(format!("ERROR: {error}"));
                RunStatus::Failed { error }
            }
        };
        debug_assert!(matches!(phase, RunPhase::Succeeded | RunPhase::Failed));

        RunReport {
            run_id,
            status,
            log: reporter.drain(),
        }
    }
}
