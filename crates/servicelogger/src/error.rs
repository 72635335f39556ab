use std::path::PathBuf;

/// Errors produced while building, posting or listing service logs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A log entry was rejected before anything was sent.
    #[error("invalid log entry: {0}")]
    Validation(String),

    /// The service answered with a status code other than the expected one.
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("request to the service log API failed: {0}")]
    Transport(#[from] ureq::Error),

    #[error("unexpected response from the service log API: {0}")]
    Decode(String),

    #[error("failed to load templates from {}: {message}", path.display())]
    Template { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
