//! Command Line Interface (CLI) layer for csv-remove-users.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! terminal collaborators (`progress`, `prompt`) and the orchestration
//! logic (`runner`). It wires user-provided options to the removal workflow
//! exposed by the library.
pub mod args;
pub mod errors;
pub mod progress;
pub mod prompt;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
