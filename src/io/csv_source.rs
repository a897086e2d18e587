//! Streaming CSV source for the removal workflow.
//!
//! The file is opened once: a counting pass sizes the progress display, then
//! the handle is rewound and rows are deserialized one record at a time. The
//! whole file is never held in memory.
use std::fs::File;
use std::io::Seek;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::types::CsvRow;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

/// An opened, readable CSV file of users to remove.
#[derive(Debug)]
pub struct CsvSource {
    path: PathBuf,
    file: File,
}

impl CsvSource {
    /// Open `path` for streaming. Anything other than a readable regular file
    /// is reported as [`ConfigError::MissingCsv`].
    pub fn open(path: &Path) -> std::result::Result<Self, ConfigError> {
        let is_file = path.metadata().map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            debug!("CSV path is not a regular file: {:?}", path);
            return Err(ConfigError::MissingCsv);
        }
        let file = File::open(path).map_err(|e| {
            debug!("Cannot open CSV {:?}: {}", path, e);
            ConfigError::MissingCsv
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count data rows (header excluded) and rewind to the start.
    pub fn count_rows(&mut self) -> Result<u64> {
        let count = {
            let mut reader = reader_builder().from_reader(&mut self.file);
            let mut record = csv::ByteRecord::new();
            let mut count = 0u64;
            while reader.read_byte_record(&mut record)? {
                count += 1;
            }
            count
        };
        self.file.rewind()?;
        Ok(count)
    }

    /// Consume the source and stream its rows in file order.
    pub fn rows(self) -> Result<CsvRows> {
        let mut reader = reader_builder().from_reader(self.file);
        let headers = reader.byte_headers()?.clone();
        Ok(CsvRows {
            reader,
            headers,
            record: csv::ByteRecord::new(),
            next_line: 2,
            done: false,
        })
    }
}

/// Iterator over `(line, row)` pairs. A row that cannot be decoded yields an
/// error in place of the row; the caller decides whether it is fatal.
///
/// Records are read as raw bytes and only the fields of [`CsvRow`] are
/// decoded, so bad bytes in a column nobody reads do not cost the row.
pub struct CsvRows {
    reader: csv::Reader<File>,
    headers: csv::ByteRecord,
    record: csv::ByteRecord,
    next_line: usize,
    done: bool,
}

impl Iterator for CsvRows {
    type Item = (usize, csv::Result<CsvRow>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let fallback_line = self.next_line;
        self.next_line += 1;
        match self.reader.read_byte_record(&mut self.record) {
            Ok(false) => {
                self.done = true;
                None
            }
            Ok(true) => {
                let line = self
                    .record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(fallback_line);
                Some((line, self.record.deserialize(Some(&self.headers))))
            }
            Err(e) => {
                // An I/O error leaves the reader in an unknown state; stop after reporting it.
                self.done = e.is_io_error();
                let line = e
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(fallback_line);
                Some((line, Err(e)))
            }
        }
    }
}
