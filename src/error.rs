//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Fatal failures only: configuration problems detected before any row is
//! touched, and I/O or decoding failures that make the run impossible to
//! continue. Per-row problems are recorded as outcomes, never as errors.
use thiserror::Error;

use crate::types::UserId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("User store error: {0}")]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Precondition failures. Any of these aborts the run before the first row.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing or unreadable csv: pass a readable file with `--csv`")]
    MissingCsv,

    #[error("missing reassign argument: pass the ID of a surviving user with `--reassign`")]
    MissingReassign,

    #[error(
        "invalid reassignment user: no user with ID {0}. List existing users in the store to find a valid ID"
    )]
    InvalidReassignUser(UserId),

    #[error("removal cancelled by operator")]
    Declined,

    #[error("cannot confirm removal in non-interactive mode; use --yes to skip confirmation")]
    NonInteractive,
}

/// Failures reported by a [`crate::store::UserStore`].
///
/// A removal that returns one of these is recorded as a failed row; only a
/// store that cannot be loaded at all is fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user {0} does not exist")]
    UserNotFound(UserId),

    #[error("site {0} does not exist")]
    SiteNotFound(crate::types::SiteId),

    #[error("failed to read store {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed store {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to persist store: {0}")]
    Persist(String),

    #[error("{0}")]
    Other(String),
}

impl StoreError {
    pub fn persist<E: std::fmt::Display>(e: E) -> Self {
        StoreError::Persist(e.to_string())
    }
}
