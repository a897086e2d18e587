use thiserror::Error;

use csv_remove_users::Error as RemovalError;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Removal(#[from] RemovalError),
}

impl From<csv_remove_users::StoreError> for AppError {
    fn from(e: csv_remove_users::StoreError) -> Self {
        AppError::Removal(e.into())
    }
}

impl AppError {
    /// Process exit code: 2 for configuration problems, 1 for anything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Removal(RemovalError::Config(_)) => 2,
            _ => 1,
        }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self);
    }
}
