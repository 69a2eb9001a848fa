//! CLI entry point — the command-line counterpart of the portal's
//! "Reset and Seed Database" button.
//!
//! Reads backend settings from the environment, runs one reset-and-seed
//! pass, prints the run log, and exits non-zero on failure.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use carelog_seed::api::{PostgrestStore, SupabaseAdmin, SupabaseAuth};
use carelog_seed::config::{self, SeedConfig};
use carelog_seed::dataset;
use carelog_seed::seed::{RunStatus, SeedPipeline};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let pipeline = SeedPipeline::new(
        SupabaseAdmin::new(&config),
        SupabaseAuth::new(&config),
        PostgrestStore::new(&config),
    );

    let specs = dataset::demo_users();
    let targets = dataset::demo_emails(&specs);
    let report = pipeline.run_seed(&targets, &specs).await;

    for entry in &report.log {
        println!("{entry}");
    }

    match report.status {
        RunStatus::Succeeded => ExitCode::SUCCESS,
        RunStatus::Failed { error } => {
            eprintln!("Seeding failed: {error}");
            ExitCode::FAILURE
        }
    }
}
