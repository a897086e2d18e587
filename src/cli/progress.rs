//! Progress bar observer for removal runs.
//!
//! Row messages are logged while the bar is suspended so log lines and the
//! bar never overwrite each other. When a report file is attached, each row
//! is appended to it as it is processed.
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::info;

use csv_remove_users::{
    RemovalObserver, RemovalOutcome, RemovalReport, ReportWriter, Result, RowOutcome, log_row,
};

const TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len}";
const DRY_RUN_TEMPLATE: &str = "{msg} [{bar:40.yellow/blue}] {pos}/{len}";

pub struct ProgressObserver {
    bar: ProgressBar,
    report: Option<ReportWriter>,
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            report: None,
        }
    }
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, report: ReportWriter) -> Self {
        self.report = Some(report);
        self
    }

    /// Flush the report file, if any, returning the first write error.
    pub fn close(self) -> Result<()> {
        if let Some(report) = self.report {
            report.finish()?;
        }
        Ok(())
    }
}

impl RemovalObserver for ProgressObserver {
    fn start(&mut self, total_rows: u64, dry_run: bool) {
        let bar = ProgressBar::with_draw_target(Some(total_rows), ProgressDrawTarget::stderr());
        let template = if dry_run { DRY_RUN_TEMPLATE } else { TEMPLATE };
        if let Ok(style) = ProgressStyle::default_bar().template(template) {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        bar.set_message(if dry_run {
            "(dry run) Removing..."
        } else {
            "Removing..."
        });
        self.bar = bar;
    }

    fn note(&mut self, message: &str) {
        self.bar.suspend(|| info!("{}", message));
    }

    fn row(&mut self, outcome: &RowOutcome) {
        self.bar.suspend(|| log_row(outcome));
        if let Some(report) = &mut self.report {
            report.write_row(outcome);
        }
        if matches!(outcome.outcome, RemovalOutcome::Removed { .. }) {
            self.bar.inc(1);
        }
    }

    fn finish(&mut self, report: &RemovalReport) {
        self.bar.finish_and_clear();
        if let Some(writer) = &mut self.report {
            writer.write_summary(report);
        }
        info!(
            "Processed {} rows: {} removed, {} skipped, {} failed",
            report.processed(),
            report.removed,
            report.skipped,
            report.failed
        );
        info!("All done.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv_remove_users::User;
    use std::path::Path;

    #[test]
    fn test_bar_advances_on_removals_only() {
        let mut observer = ProgressObserver::new();
        observer.start(3, true);
        observer.row(&RowOutcome::new(2, "a", RemovalOutcome::Removed { simulated: true }));
        observer.row(&RowOutcome::new(3, "b", RemovalOutcome::SkippedNotFound));
        observer.row(&RowOutcome::new(4, "c", RemovalOutcome::Failed { error: None }));
        assert_eq!(observer.bar.position(), 1);
        assert_eq!(observer.bar.length(), Some(3));

        let report = RemovalReport::new(Path::new("u.csv"), 1, User::new(1, "admin"), true);
        observer.finish(&report);
        assert!(observer.bar.is_finished());
    }

    #[test]
    fn test_default_has_hidden_bar_and_no_report() {
        let observer = ProgressObserver::default();
        assert!(observer.bar.is_hidden());
        assert!(observer.report.is_none());
        assert!(observer.close().is_ok());
    }

    #[test]
    fn test_rows_and_summary_stream_to_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.jsonl");
        let mut observer = ProgressObserver::new().with_report(ReportWriter::create(&path).unwrap());

        let mut report = RemovalReport::new(Path::new("u.csv"), 1, User::new(1, "admin"), false);
        observer.start(2, false);
        for row in [
            RowOutcome::new(2, "a", RemovalOutcome::Removed { simulated: false }),
            RowOutcome::new(3, "b", RemovalOutcome::SkippedNotFound),
        ] {
            observer.row(&row);
            report.record(&row);
        }
        observer.finish(&report);
        observer.close().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1]["status"], "skipped_not_found");
        assert_eq!(lines[2]["summary"]["removed"], 1);
        assert_eq!(lines[2]["summary"]["skipped"], 1);
    }
}
