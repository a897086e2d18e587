//! Hooks through which the workflow reports progress and asks for
//! confirmation. The CLI plugs in a progress bar and a terminal prompt;
//! library callers can use [`LogObserver`] and [`AssumeYes`].
use tracing::{info, warn};

use super::report::RemovalReport;
use crate::error::ConfigError;
use crate::types::RowOutcome;

pub trait RemovalObserver {
    /// Called once before the first row, with the number of data rows.
    fn start(&mut self, _total_rows: u64, _dry_run: bool) {}

    /// Informational line outside the per-row flow.
    fn note(&mut self, message: &str);

    /// Called for every row, in file order.
    fn row(&mut self, outcome: &RowOutcome);

    /// Called once after the last row.
    fn finish(&mut self, _report: &RemovalReport) {}
}

/// Writes every event to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct LogObserver;

impl RemovalObserver for LogObserver {
    fn note(&mut self, message: &str) {
        info!("{}", message);
    }

    fn row(&mut self, outcome: &RowOutcome) {
        log_row(outcome);
    }

    fn finish(&mut self, _report: &RemovalReport) {
        info!("All done.");
    }
}

/// Log a row outcome at the level it deserves.
pub fn log_row(outcome: &RowOutcome) {
    if outcome.outcome.is_warning() {
        warn!("{}", outcome);
    } else {
        info!("{}", outcome);
    }
}

/// Operator confirmation before live removals.
pub trait Confirm {
    /// `Ok(false)` declines. `Err` means no answer could be obtained.
    fn confirm(&mut self, prompt: &str) -> Result<bool, ConfigError>;
}

/// Answers yes without asking.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool, ConfigError> {
        Ok(true)
    }
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> Result<bool, ConfigError>,
{
    fn confirm(&mut self, prompt: &str) -> Result<bool, ConfigError> {
        self(prompt)
    }
}
