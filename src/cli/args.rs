use clap::Parser;
use std::path::PathBuf;

use csv_remove_users::{DEFAULT_SITE, RemovalRequest, SiteId, parse_dry_run};

#[derive(Parser, Debug)]
#[command(
    name = "csv-remove-users",
    version,
    about = "Remove users listed in a CSV from a site, reassigning their posts to another user"
)]
pub struct CliArgs {
    /// Path to a CSV of users to remove (columns: ID, user_login)
    #[arg(long, value_name = "CSV_FILE")]
    pub csv: Option<PathBuf>,

    /// ID of the user who receives the removed users' posts; never removed itself
    #[arg(long, value_name = "USER_ID")]
    pub reassign: Option<String>,

    /// List users to be removed but perform no actions. Only `--dry-run=false` disables it
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub dry_run: Option<String>,

    /// JSON user store to operate on
    #[arg(long, value_name = "PATH", env = "CSV_REMOVE_USERS_STORE")]
    pub store: PathBuf,

    /// Site to remove users from
    #[arg(long, value_name = "SITE_ID", env = "CSV_REMOVE_USERS_SITE", default_value_t = DEFAULT_SITE)]
    pub site: SiteId,

    /// Skip the confirmation prompt for live runs
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,

    /// Write a JSON report of every row's outcome
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn request(&self) -> RemovalRequest {
        RemovalRequest {
            csv_path: self.csv.clone(),
            reassign: self.reassign.clone(),
            dry_run: parse_dry_run(self.dry_run.as_deref()),
            assume_yes: self.yes,
        }
    }
}
