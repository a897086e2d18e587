//! csv-remove-users CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the removal
//! workflow, and exit with appropriate status.
//! For programmatic use, prefer the library API (`csv_remove_users::remove_users`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();

    match cli::run(args) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}
