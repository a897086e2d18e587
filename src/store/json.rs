use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{SiteDirectory, UserStore};
use crate::error::StoreError;
use crate::types::{SiteId, User, UserId};

/// A [`SiteDirectory`] backed by a JSON file.
///
/// Every successful removal is written back before it is reported. The write
/// goes to a temporary file in the same directory which then replaces the
/// original, so a crash never leaves a half-written store behind.
///
/// Each removal clones the directory, rewrites the whole file and syncs it,
/// so a run costs O(rows x store size) in I/O. That suits the small fixture
/// and admin stores this backend is meant for; a store that does not fit
/// that profile should implement [`UserStore`] over a real database.
#[derive(Debug)]
pub struct JsonUserStore {
    path: PathBuf,
    directory: SiteDirectory,
}

impl JsonUserStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Load {
            path: path.display().to_string(),
            source,
        })?;
        let directory: SiteDirectory =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: path.display().to_string(),
                source,
            })?;
        info!(
            "Loaded user store {:?}: {} users, {} sites, {} posts",
            path,
            directory.users.len(),
            directory.sites.len(),
            directory.posts.len()
        );
        Ok(Self {
            path: path.to_path_buf(),
            directory,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn directory(&self) -> &SiteDirectory {
        &self.directory
    }

    fn persist(&self, directory: &SiteDirectory) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(parent).map_err(StoreError::persist)?;
        serde_json::to_writer_pretty(&mut tmp, directory).map_err(StoreError::persist)?;
        tmp.write_all(b"\n").map_err(StoreError::persist)?;
        tmp.as_file().sync_all().map_err(StoreError::persist)?;
        tmp.persist(&self.path).map_err(StoreError::persist)?;
        debug!("Persisted user store {:?}", self.path);
        Ok(())
    }
}

impl UserStore for JsonUserStore {
    fn user_by_id(&self, id: UserId) -> Option<User> {
        self.directory.user_by_id(id)
    }

    fn user_by_login(&self, login: &str) -> Option<User> {
        self.directory.user_by_login(login)
    }

    fn remove_user_from_site(
        &mut self,
        user: UserId,
        site: SiteId,
        reassign: UserId,
    ) -> Result<bool, StoreError> {
        let mut next = self.directory.clone();
        if !next.remove_user_from_site(user, site, reassign)? {
            return Ok(false);
        }
        self.persist(&next)?;
        self.directory = next;
        Ok(true)
    }
}
