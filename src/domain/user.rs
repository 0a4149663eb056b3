//! User accounts as seen by the console.

use serde::Serialize;

use crate::domain::types::UserId;

/// Read-only projection of a user account held by the backend.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub nick_name: String,
    pub email: String,
    /// Avatar path relative to the avatar base URL; empty when unset.
    pub head_pic: String,
    pub is_frozen: bool,
    /// Registration time exactly as the backend reported it.
    pub create_time: String,
}

impl UserRecord {
    /// Stable row key. Usernames are unique on the backend.
    pub fn key(&self) -> &str {
        &self.username
    }
}

/// Filters applied to a user search. `None` means "no constraint".
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SearchFilter {
    pub username: Option<String>,
    pub nick_name: Option<String>,
    pub email: Option<String>,
}

impl SearchFilter {
    /// Builds a filter, treating empty strings as absent.
    pub fn new(
        username: Option<String>,
        nick_name: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            username: non_empty(username),
            nick_name: non_empty(nick_name),
            email: non_empty(email),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.nick_name.is_none() && self.email.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPage {
    pub records: Vec<UserRecord>,
    /// Total number of matching users when the backend reports it.
    pub total: Option<usize>,
}
