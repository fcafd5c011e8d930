//! Error type shared by the backend ports.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Base URL or anon key missing from the environment.
    #[error("backend not configured: {0} is unset")]
    NotConfigured(&'static str),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unable to decode payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A `.env` file exists but could not be parsed.
    #[error("unable to read env file: {0}")]
    EnvFile(String),

    /// The locally cached session could not be read.
    #[error("session cache unavailable: {0}")]
    SessionCache(String),
}
