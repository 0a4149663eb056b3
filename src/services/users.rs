//! Services driving the user search and freeze workflows.

use crate::backend::{SearchQuery, UserBackend};
use crate::console::{FetchOutcome, Notice, UserConsole};
use crate::domain::page::PageState;
use crate::domain::types::{PageSize, UserId};
use crate::domain::user::{SearchFilter, UserRecord};
use crate::dto::users::{UserManagePageData, UserSearchData, UserTable};
use crate::forms::users::SearchUserForm;
use crate::models::config::ServerConfig;
use crate::pagination::Pager;
use crate::services::{ServiceError, ServiceResult};

/// Validates the search form and runs exactly one backend search for it.
///
/// The page number carried by the form is used as is; a new filter does not
/// send the administrator back to the first page.
pub async fn search_users<B>(
    backend: &B,
    form: SearchUserForm,
    default_size: PageSize,
) -> ServiceResult<UserSearchData>
where
    B: UserBackend + ?Sized,
{
    let mut console = UserConsole::new(form.page_state(default_size));

    // A form without filters is a reset; it needs no validation.
    let ticket = if form.filter_unchecked().is_empty() {
        console.reset()
    } else {
        console.submit(&form).map_err(|err| {
            log::warn!("Rejected user search form: {err}");
            ServiceError::from(err)
        })?
    };

    let result = backend.search_users(ticket.query()).await;
    if let Err(err) = &result {
        log::error!("Failed to search users: {err}");
    }

    match console.complete_fetch(&ticket, result) {
        FetchOutcome::Applied => Ok(UserSearchData {
            filter: console.filter().clone(),
            page: console.page(),
            records: console.records().to_vec(),
            total: console.total(),
            notices: console.take_notices(),
        }),
        FetchOutcome::Failed(notice) => Err(ServiceError::Backend(notice.message)),
        FetchOutcome::Stale => Err(ServiceError::Unexpected(
            "search response was superseded".to_string(),
        )),
    }
}

/// Loads everything the user management template needs.
///
/// Validation and backend failures still produce a page: the former with an
/// inline message, the latter with an error notice.
pub async fn load_user_manage_page<B>(
    backend: &B,
    form: SearchUserForm,
    config: &ServerConfig,
) -> ServiceResult<UserManagePageData>
where
    B: UserBackend + ?Sized,
{
    let default_size = config.default_page_size();
    let entered = form.filter_unchecked();
    let page = form.page_state(default_size);

    match search_users(backend, form, default_size).await {
        Ok(data) => Ok(build_page(
            config,
            data.filter,
            data.page,
            &data.records,
            data.total,
            None,
            data.notices,
        )),
        Err(ServiceError::Form(message)) => Ok(build_page(
            config,
            entered,
            page,
            &[],
            None,
            Some(message),
            Vec::new(),
        )),
        Err(ServiceError::Backend(message)) => Ok(build_page(
            config,
            entered,
            page,
            &[],
            None,
            None,
            vec![Notice::error(message)],
        )),
        Err(err) => Err(err),
    }
}

fn build_page(
    config: &ServerConfig,
    filter: SearchFilter,
    page: PageState,
    records: &[UserRecord],
    total: Option<usize>,
    email_error: Option<String>,
    notices: Vec<Notice>,
) -> UserManagePageData {
    let pager = Pager::new(
        &filter,
        page,
        total,
        records.len(),
        &config.page_size_options(),
    );
    UserManagePageData {
        table: UserTable::new(records, &config.avatar_base_url),
        filter,
        page,
        pager,
        email_error,
        notices,
    }
}

/// Freezes an account. On success returns the search to run next so the
/// table reflects the new state; the console state comes from `state`.
pub async fn freeze_user<B>(
    backend: &B,
    user_id: i64,
    state: &SearchUserForm,
    default_size: PageSize,
) -> ServiceResult<SearchQuery>
where
    B: UserBackend + ?Sized,
{
    let user_id = UserId::new(user_id)?;
    let mut console = UserConsole::restore(state.filter_unchecked(), state.page_state(default_size));

    let result = backend.freeze_user(user_id).await;
    match &result {
        Ok(()) => log::info!("Froze user {user_id}"),
        Err(err) => log::error!("Failed to freeze user {user_id}: {err}"),
    }

    match console.complete_freeze(result) {
        Some(ticket) => Ok(ticket.query().clone()),
        None => {
            let message = console
                .take_notices()
                .pop()
                .map(|notice| notice.message)
                .unwrap_or_default();
            Err(ServiceError::Backend(message))
        }
    }
}
