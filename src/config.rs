//! Environment-driven configuration for the hosted backend.

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "carelog-seed";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Connection settings for the hosted auth + storage backend.
///
/// The service role key is privileged (directory listing and deletion);
/// the anon key is what the portal itself signs up with.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub base_url: String,
    pub anon_key: String,
    pub service_role_key: String,
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup. Lets tests avoid process-global env.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let require = |key: &'static str| lookup(key).ok_or(ConfigError::MissingVar(key));
        Ok(Self {
            base_url: require("SUPABASE_URL")?.trim_end_matches('/').to_string(),
            anon_key: require("SUPABASE_ANON_KEY")?,
            service_role_key: require("SUPABASE_SERVICE_ROLE_KEY")?,
        })
    }
}
