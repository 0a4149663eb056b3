//! Shared fixtures for the integration tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::cookie::Key;
use actix_web::web;
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use async_trait::async_trait;
use tera::Tera;

use user_admin_console::backend::errors::{BackendError, BackendResult};
use user_admin_console::backend::{SearchQuery, UserBackend};
use user_admin_console::domain::types::UserId;
use user_admin_console::domain::user::{UserPage, UserRecord};
use user_admin_console::models::config::ServerConfig;

pub fn user(id: i64, username: &str, is_frozen: bool) -> UserRecord {
    UserRecord {
        id: UserId::new(id).expect("valid id"),
        username: username.to_string(),
        nick_name: format!("{username}-nick"),
        email: format!("{username}@example.com"),
        head_pic: format!("avatars/{username}.png"),
        is_frozen,
        create_time: "2024-05-01 10:00:00".to_string(),
    }
}

/// Builds the console app around `$backend` (an `Arc<FakeBackend>`).
macro_rules! console_app {
    ($backend:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap($crate::common::flash_framework())
                .app_data($crate::common::backend_data($backend.clone()))
                .app_data(actix_web::web::Data::new($crate::common::tera()))
                .app_data(actix_web::web::Data::new($crate::common::server_config()))
                .configure(user_admin_console::configure_routes),
        )
        .await
    };
}

#[allow(dead_code)]
pub fn sample_backend() -> Arc<FakeBackend> {
    Arc::new(FakeBackend::new(vec![
        user(1, "neo", false),
        user(2, "trinity", true),
        user(3, "morpheus", false),
    ]))
}

/// In-memory backend that records every search it receives.
#[allow(dead_code)]
pub struct FakeBackend {
    users: Mutex<Vec<UserRecord>>,
    searches: Mutex<Vec<SearchQuery>>,
    freezes: AtomicUsize,
    failure: Option<BackendError>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: Mutex::new(users),
            searches: Mutex::new(Vec::new()),
            freezes: AtomicUsize::new(0),
            failure: None,
        }
    }

    /// Every call fails with `err`.
    pub fn failing(err: BackendError) -> Self {
        Self {
            failure: Some(err),
            ..Self::new(Vec::new())
        }
    }

    pub fn searches(&self) -> Vec<SearchQuery> {
        self.searches.lock().expect("lock").clone()
    }

    pub fn freeze_count(&self) -> usize {
        self.freezes.load(Ordering::SeqCst)
    }

    pub fn is_frozen(&self, username: &str) -> bool {
        self.users
            .lock()
            .expect("lock")
            .iter()
            .any(|u| u.username == username && u.is_frozen)
    }
}

#[async_trait]
impl UserBackend for FakeBackend {
    async fn search_users(&self, query: &SearchQuery) -> BackendResult<UserPage> {
        self.searches.lock().expect("lock").push(query.clone());
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let users = self.users.lock().expect("lock");
        let matching: Vec<UserRecord> = users
            .iter()
            .filter(|u| {
                query
                    .filter
                    .username
                    .as_deref()
                    .is_none_or(|name| u.username.contains(name))
            })
            .cloned()
            .collect();

        let size = query.page.page_size.get();
        let skip = (query.page.page_no.get() - 1).saturating_mul(size);
        Ok(UserPage {
            total: Some(matching.len()),
            records: matching.into_iter().skip(skip).take(size).collect(),
        })
    }

    async fn freeze_user(&self, user_id: UserId) -> BackendResult<()> {
        self.freezes.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let mut users = self.users.lock().expect("lock");
        match users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                user.is_frozen = true;
                Ok(())
            }
            None => Err(BackendError::Rejected {
                status: 404,
                message: Some("用户不存在".to_string()),
            }),
        }
    }
}

pub fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*".to_string(),
        secret: "s".repeat(64),
        api_base_url: "http://localhost:3005".to_string(),
        api_token: None,
        avatar_base_url: "http://cdn.example.com/".to_string(),
        default_page_size: 10,
        page_size_options: vec![10, 20, 50],
        request_timeout_secs: 5,
        confirm_freeze: false,
    }
}

pub fn tera() -> Tera {
    Tera::new("templates/**/*").expect("templates parse")
}

pub fn flash_framework() -> FlashMessagesFramework {
    let store = CookieMessageStore::builder(Key::from(&[7u8; 64])).build();
    FlashMessagesFramework::builder(store).build()
}

pub fn backend_data(backend: Arc<FakeBackend>) -> web::Data<dyn UserBackend> {
    let backend: Arc<dyn UserBackend> = backend;
    web::Data::from(backend)
}
