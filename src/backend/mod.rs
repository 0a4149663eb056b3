//! Access to the remote user-management API.

use async_trait::async_trait;

use crate::domain::{
    page::PageState,
    types::UserId,
    user::{SearchFilter, UserPage},
};
use crate::backend::errors::BackendResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Parameters of one user search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub filter: SearchFilter,
    pub page: PageState,
}

impl SearchQuery {
    pub fn new(page: PageState) -> Self {
        Self {
            filter: SearchFilter::default(),
            page,
        }
    }

    pub fn filter(mut self, filter: SearchFilter) -> Self {
        self.filter = filter;
        self
    }
}

#[async_trait]
pub trait UserBackend: Send + Sync {
    /// Fetches one page of users matching the filter.
    async fn search_users(&self, query: &SearchQuery) -> BackendResult<UserPage>;

    /// Freezes the account with the given id.
    async fn freeze_user(&self, user_id: UserId) -> BackendResult<()>;
}
