//! The removal workflow: validate the request, then walk the CSV in file
//! order deciding the fate of each listed user.
use tracing::debug;

use super::observer::{Confirm, RemovalObserver};
use super::params::{RemovalRequest, parse_reassign};
use super::report::RemovalReport;
use crate::error::{ConfigError, Result};
use crate::io::CsvSource;
use crate::store::UserStore;
use crate::types::{RemovalOutcome, RowOutcome, SiteId, User, UserId};

pub const CONFIRM_PROMPT: &str =
    "Are you sure you want to proceed? You can use the --dry-run option first to make sure.";

/// Remove every user listed in `request.csv_path` from `site`, handing their
/// content to the reassignment target.
///
/// All preconditions are checked before the first row is read; any failure
/// there is returned as [`crate::Error::Config`] and nothing is touched.
/// Per-row problems never abort the run; each row is handed to `observer`
/// and only counted in the returned report, so memory stays flat however
/// long the CSV is.
pub fn remove_users<S, C, O>(
    request: &RemovalRequest,
    store: &mut S,
    site: SiteId,
    confirm: &mut C,
    observer: &mut O,
) -> Result<RemovalReport>
where
    S: UserStore + ?Sized,
    C: Confirm + ?Sized,
    O: RemovalObserver + ?Sized,
{
    let csv_path = request
        .csv_path
        .as_deref()
        .ok_or(ConfigError::MissingCsv)?;
    let mut source = CsvSource::open(csv_path)?;

    let reassign = parse_reassign(request.reassign.as_deref())?;
    let target = store
        .user_by_id(reassign)
        .ok_or(ConfigError::InvalidReassignUser(reassign))?;

    if !request.dry_run && !request.assume_yes && !confirm.confirm(CONFIRM_PROMPT)? {
        return Err(ConfigError::Declined.into());
    }

    observer.note(&format!(
        "Reassigning posts belonging to removed users to {}",
        target.login
    ));

    let total_rows = source.count_rows()?;
    debug!("{:?}: {} rows to process", source.path(), total_rows);

    let mut report = RemovalReport::new(source.path(), site, target, request.dry_run);
    report.total_rows = total_rows;
    observer.start(total_rows, request.dry_run);

    for (line, row) in source.rows()? {
        let outcome = match row {
            Ok(row) => {
                let result = remove_one(store, &row.user_login, site, reassign, request.dry_run);
                RowOutcome::new(line, row.user_login, result)
            }
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => RowOutcome::new(
                line,
                String::new(),
                RemovalOutcome::Failed {
                    error: Some(e.to_string()),
                },
            ),
        };
        observer.row(&outcome);
        report.record(&outcome);
    }

    report.finish();
    observer.finish(&report);
    Ok(report)
}

fn remove_one<S>(
    store: &mut S,
    login: &str,
    site: SiteId,
    reassign: UserId,
    dry_run: bool,
) -> RemovalOutcome
where
    S: UserStore + ?Sized,
{
    let Some(User { id, .. }) = store.user_by_login(login) else {
        return RemovalOutcome::SkippedNotFound;
    };
    if id == reassign {
        return RemovalOutcome::SkippedIsReassignTarget { user_id: reassign };
    }
    if dry_run {
        return RemovalOutcome::Removed { simulated: true };
    }

    match store.remove_user_from_site(id, site, reassign) {
        Ok(true) => RemovalOutcome::Removed { simulated: false },
        Ok(false) => RemovalOutcome::Failed { error: None },
        Err(e) => RemovalOutcome::Failed {
            error: Some(e.to_string()),
        },
    }
}
