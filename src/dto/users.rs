//! DTOs shaped for the user management template and API.

use serde::Serialize;

use crate::console::Notice;
use crate::domain::page::PageState;
use crate::domain::user::{SearchFilter, UserRecord};
use crate::forms::users::SearchUserForm;
use crate::pagination::Pager;

pub const USER_MANAGE_PATH: &str = "/user_manage";
pub const FROZEN_LABEL: &str = "已冻结";
pub const ACTIVE_LABEL: &str = "正常";
pub const FREEZE_ACTION_LABEL: &str = "冻结";
const AVATAR_WIDTH: u32 = 50;

/// Columns of the user table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Username,
    Avatar,
    NickName,
    Email,
    CreateTime,
    Status,
    Actions,
}

impl ColumnKind {
    pub const ALL: [ColumnKind; 7] = [
        ColumnKind::Username,
        ColumnKind::Avatar,
        ColumnKind::NickName,
        ColumnKind::Email,
        ColumnKind::CreateTime,
        ColumnKind::Status,
        ColumnKind::Actions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ColumnKind::Username => "用户名",
            ColumnKind::Avatar => "头像",
            ColumnKind::NickName => "昵称",
            ColumnKind::Email => "邮箱",
            ColumnKind::CreateTime => "注册时间",
            ColumnKind::Status => "状态",
            ColumnKind::Actions => "操作",
        }
    }

    pub fn render(self, record: &UserRecord, avatar_base_url: &str) -> Cell {
        match self {
            ColumnKind::Username => Cell::text(&record.username),
            ColumnKind::Avatar if record.head_pic.is_empty() => Cell::Blank,
            ColumnKind::Avatar => Cell::Image {
                src: avatar_url(avatar_base_url, &record.head_pic),
                width: AVATAR_WIDTH,
            },
            ColumnKind::NickName => Cell::text(&record.nick_name),
            ColumnKind::Email => Cell::text(&record.email),
            ColumnKind::CreateTime => Cell::text(&record.create_time),
            ColumnKind::Status if record.is_frozen => Cell::Badge {
                label: FROZEN_LABEL.to_string(),
            },
            ColumnKind::Status => Cell::text(ACTIVE_LABEL),
            ColumnKind::Actions => Cell::Action {
                label: FREEZE_ACTION_LABEL.to_string(),
                user_id: record.id.get(),
            },
        }
    }
}

/// Content of one table cell. The template switches on `kind`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { value: String },
    Image { src: String, width: u32 },
    Blank,
    Badge { label: String },
    Action { label: String, user_id: i64 },
}

impl Cell {
    fn text(value: &str) -> Self {
        Cell::Text {
            value: value.to_string(),
        }
    }
}

/// Page URL restoring the given console state.
pub fn console_url(filter: &SearchFilter, page: PageState) -> String {
    let form = SearchUserForm::from_state(filter, page);
    match serde_html_form::to_string(&form) {
        Ok(query) if !query.is_empty() => format!("{USER_MANAGE_PATH}?{query}"),
        _ => USER_MANAGE_PATH.to_string(),
    }
}

/// Joins the avatar base URL and a relative path with exactly one slash.
pub fn avatar_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserRow {
    /// Row key; the username.
    pub key: String,
    pub cells: Vec<Cell>,
}

impl UserRow {
    pub fn new(record: &UserRecord, avatar_base_url: &str) -> Self {
        Self {
            key: record.key().to_string(),
            cells: ColumnKind::ALL
                .iter()
                .map(|column| column.render(record, avatar_base_url))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<UserRow>,
}

impl UserTable {
    pub fn new(records: &[UserRecord], avatar_base_url: &str) -> Self {
        Self {
            columns: ColumnKind::ALL.iter().map(|c| c.title()).collect(),
            rows: records
                .iter()
                .map(|record| UserRow::new(record, avatar_base_url))
                .collect(),
        }
    }
}

/// Result of a successful search.
#[derive(Debug, Clone)]
pub struct UserSearchData {
    pub filter: SearchFilter,
    pub page: PageState,
    pub records: Vec<UserRecord>,
    pub total: Option<usize>,
    pub notices: Vec<Notice>,
}

/// Data required to render the user management template.
#[derive(Debug, Clone)]
pub struct UserManagePageData {
    /// Filter values echoed back into the search form.
    pub filter: SearchFilter,
    pub page: PageState,
    pub table: UserTable,
    pub pager: Pager,
    /// Inline message under the email input.
    pub email_error: Option<String>,
    pub notices: Vec<Notice>,
}

/// JSON body of `GET /api/v1/users`.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub items: Vec<UserItem>,
    pub total: Option<usize>,
    pub page_no: usize,
    pub page_size: usize,
}

#[derive(Debug, Serialize)]
pub struct UserItem {
    pub key: String,
    #[serde(flatten)]
    pub record: UserRecord,
}

impl From<UserSearchData> for UsersResponse {
    fn from(data: UserSearchData) -> Self {
        Self {
            items: data
                .records
                .into_iter()
                .map(|record| UserItem {
                    key: record.key().to_string(),
                    record,
                })
                .collect(),
            total: data.total,
            page_no: data.page.page_no.get(),
            page_size: data.page.page_size.get(),
        }
    }
}

/// JSON body carrying a notification text.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
