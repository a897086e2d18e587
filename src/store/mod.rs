//! User store seam.
//!
//! The workflow only needs three operations from the platform that owns
//! users and their content: lookup by ID, lookup by login, and removal from a
//! site with content reassignment. [`SiteDirectory`] implements them in
//! memory; [`JsonUserStore`] adds file persistence on top.
pub mod directory;
pub mod json;

pub use directory::{Post, Site, SiteDirectory};
pub use json::JsonUserStore;

use crate::error::StoreError;
use crate::types::{SiteId, User, UserId};

pub trait UserStore {
    fn user_by_id(&self, id: UserId) -> Option<User>;

    fn user_by_login(&self, login: &str) -> Option<User>;

    /// Remove `user` from `site`, handing their content on that site to
    /// `reassign`.
    ///
    /// `Err` carries a structured failure; `Ok(false)` means the store
    /// declined without saying why. Only `Ok(true)` counts as removed.
    fn remove_user_from_site(
        &mut self,
        user: UserId,
        site: SiteId,
        reassign: UserId,
    ) -> Result<bool, StoreError>;
}
