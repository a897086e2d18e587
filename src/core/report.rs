use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{RemovalOutcome, RowOutcome, SiteId, User};

/// Summary of one removal run. Only counters are kept; per-row outcomes go
/// to the observer (and from there to a [`ReportWriter`]) as they happen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovalReport {
    pub csv_path: PathBuf,
    pub site: SiteId,
    pub reassign_to: User,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Data rows counted before processing (display only)
    pub total_rows: u64,
    pub removed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RemovalReport {
    pub fn new(csv_path: &Path, site: SiteId, reassign_to: User, dry_run: bool) -> Self {
        Self {
            csv_path: csv_path.to_path_buf(),
            site,
            reassign_to,
            dry_run,
            started_at: Utc::now(),
            finished_at: None,
            total_rows: 0,
            removed: 0,
            skipped: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, row: &RowOutcome) {
        match row.outcome {
            RemovalOutcome::Removed { .. } => self.removed += 1,
            RemovalOutcome::Failed { .. } => self.failed += 1,
            RemovalOutcome::SkippedNotFound | RemovalOutcome::SkippedIsReassignTarget { .. } => {
                self.skipped += 1
            }
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn processed(&self) -> usize {
        self.removed + self.skipped + self.failed
    }

    /// Rows reported at warning level.
    pub fn warnings(&self) -> usize {
        self.skipped + self.failed
    }
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    summary: &'a RemovalReport,
}

/// JSON-lines report: one object per row, written as the row is processed,
/// then a final `{"summary": ...}` line.
///
/// Write failures are remembered rather than returned from every call; the
/// first one comes back from [`ReportWriter::finish`].
pub struct ReportWriter<W: Write = BufWriter<File>> {
    out: W,
    error: Option<std::io::Error>,
}

impl ReportWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn write_row(&mut self, row: &RowOutcome) {
        self.write_line(row);
    }

    pub fn write_summary(&mut self, report: &RemovalReport) {
        self.write_line(&SummaryLine { summary: report });
    }

    fn write_line<T: Serialize>(&mut self, value: &T) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, value)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = result {
            self.error = Some(e);
        }
    }

    /// Flush and hand back the sink, or the first write error.
    pub fn finish(mut self) -> Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e.into());
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
