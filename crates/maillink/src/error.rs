//! Error types for mail app resolution and launching.

use thiserror::Error;

/// Errors that can occur while resolving or opening a mail app.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Options bundle is malformed or names an unknown app.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Nothing installed, or the user dismissed the picker.
    #[error("No mail app available")]
    NoAppAvailable,

    /// The scheme probe failed. Never escapes the prober.
    #[error("Probe error: {0}")]
    Probe(String),

    /// The URL launcher failed.
    #[error("Launch error: {0}")]
    Launch(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, LinkError>;
