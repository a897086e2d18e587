#![doc = r#"
csv-remove-users: remove the users listed in a CSV file from a site, handing
everything they authored on that site to a surviving user.

The crate powers the `csv-remove-users` CLI and can be embedded directly. The
store that owns users and content sits behind the [`store::UserStore`] trait;
a JSON-file implementation ([`store::JsonUserStore`]) ships with the crate.

Dry run first
-------------
```rust,no_run
use std::path::PathBuf;
use csv_remove_users::{AssumeYes, JsonUserStore, LogObserver, RemovalRequest, remove_users};

fn main() -> csv_remove_users::Result<()> {
    let mut store = JsonUserStore::open(std::path::Path::new("/data/site.json"))?;
    let request = RemovalRequest {
        csv_path: Some(PathBuf::from("/data/leavers.csv")),
        reassign: Some("1".to_string()),
        ..Default::default() // dry run
    };

    let report = remove_users(&request, &mut store, 1, &mut AssumeYes, &mut LogObserver)?;
    println!("would remove {} users", report.removed);
    Ok(())
}
```

Error handling
--------------
Precondition failures come back as [`Error::Config`] before any row is read.
Problems with individual rows never fail the call; they are recorded in the
returned [`RemovalReport`] as [`RemovalOutcome`]s.

Useful modules
--------------
- [`core`] — the workflow, its request/report types and observer hooks.
- [`store`] — the user store seam and its implementations.
- [`io`] — streaming CSV input.
- [`types`] — identifiers, users and per-row outcomes.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod core;
pub mod error;
pub mod io;
pub mod store;
pub mod types;

// Curated public API surface
pub use core::observer::{AssumeYes, Confirm, LogObserver, RemovalObserver, log_row};
pub use core::params::{RemovalRequest, parse_dry_run, parse_reassign};
pub use core::report::{RemovalReport, ReportWriter};
pub use core::workflow::{CONFIRM_PROMPT, remove_users};
pub use error::{ConfigError, Error, Result, StoreError};
pub use io::CsvSource;
pub use store::{JsonUserStore, SiteDirectory, UserStore};
pub use types::{CsvRow, DEFAULT_SITE, RemovalOutcome, RowOutcome, SiteId, User, UserId};
