//! Mock backend for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::errors::BackendResult;
use crate::backend::{SearchQuery, UserBackend};
use crate::domain::types::UserId;
use crate::domain::user::UserPage;

mock! {
    pub Backend {}

    #[async_trait]
    impl UserBackend for Backend {
        async fn search_users(&self, query: &SearchQuery) -> BackendResult<UserPage>;
        async fn freeze_user(&self, user_id: UserId) -> BackendResult<()>;
    }
}
