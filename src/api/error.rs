//! Transport-level error taxonomy for the HTTP collaborators.

use thiserror::Error;

use crate::seed::error::SeedError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

impl From<ApiError> for SeedError {
    fn from(e: ApiError) -> Self {
        SeedError::Transport(e.to_string())
    }
}
