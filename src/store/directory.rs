use serde::{Deserialize, Serialize};
use tracing::debug;

use super::UserStore;
use crate::error::StoreError;
use crate::types::{SiteId, User, UserId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    #[serde(default)]
    pub name: String,
    /// IDs of users that belong to this site
    #[serde(default)]
    pub members: Vec<UserId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub site: SiteId,
    pub author: UserId,
    #[serde(default)]
    pub title: String,
}

/// In-memory users, sites and content. This is also the on-disk layout used
/// by [`super::JsonUserStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDirectory {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub sites: Vec<Site>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl SiteDirectory {
    pub fn site(&self, id: SiteId) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == id)
    }

    pub fn is_member(&self, user: UserId, site: SiteId) -> bool {
        self.site(site).is_some_and(|s| s.members.contains(&user))
    }

    pub fn posts_by(&self, author: UserId, site: SiteId) -> impl Iterator<Item = &Post> {
        self.posts
            .iter()
            .filter(move |p| p.author == author && p.site == site)
    }
}

impl UserStore for SiteDirectory {
    fn user_by_id(&self, id: UserId) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    fn user_by_login(&self, login: &str) -> Option<User> {
        if login.is_empty() {
            return None;
        }
        self.users.iter().find(|u| u.login == login).cloned()
    }

    fn remove_user_from_site(
        &mut self,
        user: UserId,
        site: SiteId,
        reassign: UserId,
    ) -> Result<bool, StoreError> {
        if !self.users.iter().any(|u| u.id == user) {
            return Err(StoreError::UserNotFound(user));
        }
        let Some(entry) = self.sites.iter_mut().find(|s| s.id == site) else {
            return Err(StoreError::SiteNotFound(site));
        };
        let before = entry.members.len();
        entry.members.retain(|&m| m != user);
        if entry.members.len() == before {
            debug!("User {} is not a member of site {}", user, site);
            return Ok(false);
        }

        let mut reassigned = 0usize;
        for post in self
            .posts
            .iter_mut()
            .filter(|p| p.author == user && p.site == site)
        {
            post.author = reassign;
            reassigned += 1;
        }
        debug!(
            "Removed user {} from site {}, reassigned {} posts to {}",
            user, site, reassigned, reassign
        );
        Ok(true)
    }
}
