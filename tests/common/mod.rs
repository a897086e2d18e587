//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use csv_remove_users::store::{Post, Site};
use csv_remove_users::{SiteDirectory, SiteId, StoreError, User, UserId, UserStore};
use tempfile::TempDir;

/// A removal call as seen by [`RecordingStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalCall {
    pub user: UserId,
    pub site: SiteId,
    pub reassign: UserId,
}

/// Scripted reply for a removal of a given user.
#[derive(Debug, Clone)]
pub enum Reply {
    Removed,
    Unsuccessful,
    Error(String),
}

/// Store double: answers lookups from a fixed user list and records every
/// removal call.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub users: Vec<User>,
    pub replies: Vec<(UserId, Reply)>,
    pub calls: Vec<RemovalCall>,
}

impl RecordingStore {
    pub fn with_users(users: &[(UserId, &str)]) -> Self {
        Self {
            users: users.iter().map(|(id, login)| User::new(*id, *login)).collect(),
            ..Default::default()
        }
    }

    pub fn reply(mut self, user: UserId, reply: Reply) -> Self {
        self.replies.push((user, reply));
        self
    }
}

impl UserStore for RecordingStore {
    fn user_by_id(&self, id: UserId) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    fn user_by_login(&self, login: &str) -> Option<User> {
        self.users.iter().find(|u| u.login == login).cloned()
    }

    fn remove_user_from_site(
        &mut self,
        user: UserId,
        site: SiteId,
        reassign: UserId,
    ) -> Result<bool, StoreError> {
        self.calls.push(RemovalCall {
            user,
            site,
            reassign,
        });
        match self.replies.iter().find(|(id, _)| *id == user) {
            None | Some((_, Reply::Removed)) => Ok(true),
            Some((_, Reply::Unsuccessful)) => Ok(false),
            Some((_, Reply::Error(msg))) => Err(StoreError::Other(msg.clone())),
        }
    }
}

/// Temporary workspace holding CSV and store files.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Store with users admin(1), alice(2), bob(3), carol(5) all on site 1,
    /// alice and bob also authoring posts there.
    pub fn write_store(&self) -> PathBuf {
        let directory = sample_directory();
        let path = self.path("store.json");
        std::fs::write(&path, serde_json::to_string_pretty(&directory).unwrap())
            .expect("Failed to write store");
        path
    }
}

pub fn sample_directory() -> SiteDirectory {
    SiteDirectory {
        users: vec![
            User::new(1, "admin"),
            User::new(2, "alice"),
            User::new(3, "bob"),
            User::new(5, "carol"),
        ],
        sites: vec![Site {
            id: 1,
            name: "Main".into(),
            members: vec![1, 2, 3, 5],
        }],
        posts: vec![
            Post {
                id: 100,
                site: 1,
                author: 2,
                title: "Alice writes".into(),
            },
            Post {
                id: 101,
                site: 1,
                author: 3,
                title: "Bob writes".into(),
            },
        ],
    }
}
