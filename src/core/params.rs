use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::UserId;

/// Inputs to one removal run, suitable for config files and scripted use.
///
/// `csv_path` and `reassign` stay optional and raw here; the workflow
/// validates them so that a missing value and a bad value are reported the
/// same way no matter where the request came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalRequest {
    pub csv_path: Option<PathBuf>,
    /// Raw reassignment argument; see [`parse_reassign`]
    pub reassign: Option<String>,
    /// Report intended removals without touching the store
    pub dry_run: bool,
    /// Skip the confirmation prompt before live removals
    pub assume_yes: bool,
}

impl Default for RemovalRequest {
    fn default() -> Self {
        Self {
            csv_path: None,
            reassign: None,
            dry_run: true,
            assume_yes: false,
        }
    }
}

/// Interpret a `--dry-run` value. Absent or anything but the literal `false`
/// keeps dry-run mode on.
pub fn parse_dry_run(raw: Option<&str>) -> bool {
    raw != Some("false")
}

/// Parse the reassignment argument.
///
/// An absent value, the empty string or `"0"` is missing. Anything else is
/// read as an absolute integer: optional sign, then leading digits, with no
/// digits meaning 0. A 0 produced that way is returned as-is and fails the
/// later user lookup.
pub fn parse_reassign(raw: Option<&str>) -> Result<UserId, ConfigError> {
    match raw {
        None | Some("") | Some("0") => Err(ConfigError::MissingReassign),
        Some(value) => Ok(absint(value)),
    }
}

fn absint(value: &str) -> UserId {
    let trimmed = value.trim_start();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}
