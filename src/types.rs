//! Shared types used across csv-remove-users.
//! Includes identifiers (`UserId`, `SiteId`), the `User` record, input rows
//! (`CsvRow`) and per-row results (`RemovalOutcome`, `RowOutcome`).
use serde::{Deserialize, Serialize};

pub type UserId = u64;
pub type SiteId = u64;

/// The site used when none is given explicitly.
pub const DEFAULT_SITE: SiteId = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl User {
    pub fn new(id: UserId, login: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
            email: None,
            display_name: None,
        }
    }
}

/// One line of the input CSV. Absent columns default to the empty string.
///
/// `ID` is informational only, so it is decoded lossily and can never fail a
/// row; `user_login` must be valid UTF-8.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "ID", default, deserialize_with = "lossy_string")]
    pub id: String,
    #[serde(default)]
    pub user_login: String,
}

fn lossy_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Lossy;

    impl serde::de::Visitor<'_> for Lossy {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a CSV field")
        }

        fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<String, E> {
            Ok(String::from_utf8_lossy(v).into_owned())
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_bytes(Lossy)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RemovalOutcome {
    SkippedNotFound,
    SkippedIsReassignTarget {
        user_id: UserId,
    },
    Failed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    Removed {
        simulated: bool,
    },
}

impl RemovalOutcome {
    /// Whether the outcome is reported at warning level.
    pub fn is_warning(&self) -> bool {
        !matches!(self, RemovalOutcome::Removed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            RemovalOutcome::SkippedNotFound | RemovalOutcome::SkippedIsReassignTarget { .. }
        )
    }
}

/// Result for a single CSV row, in file order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowOutcome {
    /// 1-based line in the CSV file (the header is line 1)
    pub line: usize,
    pub user_login: String,
    #[serde(flatten)]
    pub outcome: RemovalOutcome,
}

impl RowOutcome {
    pub fn new(line: usize, user_login: impl Into<String>, outcome: RemovalOutcome) -> Self {
        Self {
            line,
            user_login: user_login.into(),
            outcome,
        }
    }
}

impl std::fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let login = &self.user_login;
        match &self.outcome {
            RemovalOutcome::SkippedNotFound => write!(f, "User {} does not exist", login),
            RemovalOutcome::SkippedIsReassignTarget { user_id } => {
                write!(f, "Skipping user {} with ID {}", login, user_id)
            }
            RemovalOutcome::Failed { error: Some(e) } => {
                write!(f, "Failed to remove user ({}): {}", login, e)
            }
            RemovalOutcome::Failed { error: None } => {
                write!(f, "Failed to remove user ({})", login)
            }
            RemovalOutcome::Removed { simulated: true } => {
                write!(f, "(dry run) Removed user ({})", login)
            }
            RemovalOutcome::Removed { simulated: false } => {
                write!(f, "Removed user ({})", login)
            }
        }
    }
}
