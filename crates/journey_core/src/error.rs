//! Error types for the survey core.

use serde::Serialize;
use thiserror::Error;

/// Failure of a preference-store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Backend-specific failure (e.g. browser storage quota or access denied).
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Stable failure kinds reported to the caller of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    MissingCredential,
    TransportError,
    Rejected,
}

/// Why a submission did not succeed.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// No access key in the runtime configuration. The network is never touched.
    #[error("Submission key is not configured")]
    MissingCredential,

    /// Network failure, timeout or a non-success HTTP status.
    #[error("{0}")]
    Transport(String),

    /// The relay answered but reported failure.
    #[error("{0}")]
    Rejected(String),
}

impl SubmitError {
    pub fn reason(&self) -> FailureReason {
        match self {
            SubmitError::MissingCredential => FailureReason::MissingCredential,
            SubmitError::Transport(_) => FailureReason::TransportError,
            SubmitError::Rejected(_) => FailureReason::Rejected,
        }
    }
}

/// Field-scoped validation failure, shown next to the field it belongs to.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please choose one of the listed options")]
    NotAllowed,

    #[error("You must consent to continue")]
    ConsentRequired,
}

/// Invalid configuration value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown form schema '{0}' (expected 'required-contact' or 'optional-contact')")]
    UnknownSchema(String),

    #[error("Invalid timeout '{0}': expected a whole number of seconds")]
    InvalidTimeout(String),
}
