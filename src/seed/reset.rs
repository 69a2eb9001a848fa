//! ResetCoordinator — best-effort teardown of previously-created demo
//! identities.
//!
//! One privileged listing call, then one deletion per matched identity.
//! Individual deletion failures are logged and skipped; only the listing
//! call itself is fatal, since without the listing no safe deletion can
//! occur. Deletion order follows listing order and is not significant.

use std::collections::HashSet;

use super::error::SeedError;
use super::reporter::RunReporter;
use super::traits::IdentityDirectory;

/// Free-text prefix tagging reset-phase log lines.
const RESET_TAG: &str = "[RESET]";

pub struct ResetCoordinator<'a, D: IdentityDirectory> {
    directory: &'a D,
}

impl<'a, D: IdentityDirectory> ResetCoordinator<'a, D> {
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Delete every listed identity whose email is in `targets`.
    ///
    /// Returns `Err` only when the listing call fails; deletion outcomes are
    /// reported through the log alone and never stop the pass.
    pub async fn run(
        &self,
        targets: &HashSet<String>,
        reporter: &mut RunReporter,
    ) -> Result<(), SeedError> {
        let identities = self
            .directory
            .list_identities()
            .await
            .map_err(|e| SeedError::Listing(e.to_string()))?;

        let matched: Vec<_> = identities
            .into_iter()
            .filter(|identity| targets.contains(&identity.email))
            .collect();

        if matched.is_empty() {
            reporter.append(format!("{RESET_TAG} No matching seed users found to delete."));
            return Ok(());
        }

        for identity in matched {
            match self.directory.delete_identity(&identity.id).await {
                Ok(()) => {
                    reporter.append(format!(
                        "{RESET_TAG} Successfully deleted user {}.",
                        identity.email
                    ));
                }
                Err(e) => {
                    tracing::warn!(email = %identity.email, error = %e, "deletion failed, continuing");
                    reporter.append(format!(
                        "{RESET_TAG} Failed to delete user {}: {e}",
                        identity.email
                    ));
                }
            }
        }

        Ok(())
    }
}
