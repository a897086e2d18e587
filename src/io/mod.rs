//! I/O layer: streaming CSV input for the removal workflow.
pub mod csv_source;
pub use csv_source::{CsvRows, CsvSource};
