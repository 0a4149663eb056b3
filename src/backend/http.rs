//! [`UserBackend`] implementation over HTTP+JSON.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::errors::{BackendError, BackendResult};
use crate::backend::{SearchQuery, UserBackend};
use crate::domain::types::UserId;
use crate::domain::user::UserPage;
use crate::models::config::ServerConfig;
use crate::models::user::{ApiEnvelope, FreezeParams, UserListData, UserListParams};

const USER_LIST_PATH: &str = "/user/list";
const USER_FREEZE_PATH: &str = "/user/freeze";

/// Only these statuses count as success; any other answer is a rejection.
fn is_success(status: StatusCode) -> bool {
    matches!(status, StatusCode::OK | StatusCode::CREATED)
}

#[derive(Clone, Debug)]
pub struct HttpUserBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserBackend {
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> BackendResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| BackendError::InvalidConfig(format!("api token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> BackendResult<Self> {
        Self::new(
            &config.api_base_url,
            config.api_token.as_deref(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a GET request. Any status other than 200 or 201 becomes a
    /// rejection carrying the envelope's message, if one can be read.
    async fn send<Q>(&self, path: &str, query: &Q) -> BackendResult<reqwest::Response>
    where
        Q: Serialize + ?Sized,
    {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        let status = response.status();
        if is_success(status) {
            return Ok(response);
        }

        let body = response.bytes().await?;
        let message = serde_json::from_slice::<ApiEnvelope<Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.error_message());
        Err(BackendError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    /// Sends a GET request and unwraps the `data` field of the envelope.
    async fn get<Q, T>(&self, path: &str, query: &Q) -> BackendResult<Option<T>>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send(path, query).await?.bytes().await?;
        let envelope: ApiEnvelope<T> =
            serde_json::from_slice(&body).map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl UserBackend for HttpUserBackend {
    async fn search_users(&self, query: &SearchQuery) -> BackendResult<UserPage> {
        let filter = &query.filter;
        let params = UserListParams {
            username: filter.username.as_deref().unwrap_or_default(),
            nick_name: filter.nick_name.as_deref().unwrap_or_default(),
            email: filter.email.as_deref().unwrap_or_default(),
            page_no: query.page.page_no.get(),
            page_size: query.page.page_size.get(),
        };

        let data: UserListData = self
            .get(USER_LIST_PATH, &params)
            .await?
            .ok_or_else(|| BackendError::Decode("missing data payload".to_string()))?;

        UserPage::try_from(data).map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn freeze_user(&self, user_id: UserId) -> BackendResult<()> {
        // The status alone decides; the body of a successful freeze is ignored.
        let params = FreezeParams { id: user_id.get() };
        self.send(USER_FREEZE_PATH, &params).await?;
        Ok(())
    }
}
