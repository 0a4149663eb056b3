//! Wire models of the remote user API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    types::{TypeConstraintError, UserId},
    user::{UserPage, UserRecord},
};

/// Response envelope shared by every backend endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl ApiEnvelope<Value> {
    /// Human readable failure text: a string `data` payload wins over
    /// `message`. Blank strings count as absent.
    pub fn error_message(&self) -> Option<String> {
        let from_data = match &self.data {
            Some(Value::String(text)) => Some(text.as_str()),
            _ => None,
        };
        from_data
            .or(self.message.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}

/// Query string of `GET /user/list`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams<'a> {
    pub username: &'a str,
    pub nick_name: &'a str,
    pub email: &'a str,
    pub page_no: usize,
    pub page_size: usize,
}

/// Query string of `GET /user/freeze`.
#[derive(Debug, Serialize)]
pub struct FreezeParams {
    pub id: i64,
}

/// `data` payload of a successful search.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListData {
    #[serde(default)]
    pub data_list: Vec<User>,
    #[serde(default)]
    pub total_count: Option<usize>,
}

/// A user as serialized by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nick_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub head_pic: Option<String>,
    #[serde(default)]
    pub is_frozen: bool,
    #[serde(default)]
    pub create_time: Value,
}

/// Renders a JSON timestamp verbatim: strings as-is, anything else as its JSON text.
fn verbatim(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

impl TryFrom<User> for UserRecord {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(user.id)?,
            username: user.username,
            nick_name: user.nick_name.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            head_pic: user.head_pic.unwrap_or_default(),
            is_frozen: user.is_frozen,
            create_time: verbatim(user.create_time),
        })
    }
}

impl TryFrom<UserListData> for UserPage {
    type Error = TypeConstraintError;

    fn try_from(data: UserListData) -> Result<Self, Self::Error> {
        let records = data
            .data_list
            .into_iter()
            .map(UserRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            records,
            total: data.total_count,
        })
    }
}
