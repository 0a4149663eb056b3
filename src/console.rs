//! State machine of the user management page.
//!
//! [`UserConsole`] owns the committed search filter, the pagination state and
//! the displayed records. Every action that needs fresh data returns a
//! [`FetchTicket`]; the caller performs the backend search and hands the
//! result back through [`UserConsole::complete_fetch`]. Tickets carry a
//! monotonic sequence number so that a slow response to an older request can
//! never overwrite the result of a newer one.

use crate::backend::SearchQuery;
use crate::backend::errors::{BackendError, BackendResult};
use crate::domain::page::PageState;
use crate::domain::user::{SearchFilter, UserPage, UserRecord};
use crate::forms::FormError;
use crate::forms::users::SearchUserForm;

pub const FREEZE_SUCCESS_MESSAGE: &str = "冻结成功";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient notification for the administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    fn from_backend(err: &BackendError) -> Self {
        Self::error(err.user_message())
    }
}

/// A search the console asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    query: SearchQuery,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the displayed records.
    Applied,
    /// The search failed; previous records stay visible.
    Failed(Notice),
    /// A newer search was issued meanwhile; the response was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct UserConsole {
    filter: SearchFilter,
    page: PageState,
    last_seq: u64,
    pending: Option<u64>,
    records: Vec<UserRecord>,
    total: Option<usize>,
    notices: Vec<Notice>,
}

impl UserConsole {
    /// Fresh console with no filter.
    pub fn new(page: PageState) -> Self {
        Self::restore(SearchFilter::default(), page)
    }

    /// Console resumed from a previously committed filter and page.
    pub fn restore(filter: SearchFilter, page: PageState) -> Self {
        Self {
            filter,
            page,
            last_seq: 0,
            pending: None,
            records: Vec::new(),
            total: None,
            notices: Vec::new(),
        }
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// True while the latest search has not completed.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Drains queued notifications.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Commits the form's filter and searches the current page.
    ///
    /// The page number is kept as is, even when the filter changed.
    pub fn submit(&mut self, form: &SearchUserForm) -> Result<FetchTicket, FormError> {
        let filter = form.to_filter()?;
        self.filter = filter;
        Ok(self.issue())
    }

    /// Clears all filters and searches the current page.
    pub fn reset(&mut self) -> FetchTicket {
        self.filter = SearchFilter::default();
        self.issue()
    }

    /// Moves the pager. Searches only if the page state changed.
    pub fn change_page(&mut self, page: PageState) -> Option<FetchTicket> {
        if page == self.page {
            return None;
        }
        self.page = page;
        Some(self.issue())
    }

    /// Repeats the current search.
    pub fn refetch(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Applies the result of the search `ticket` stands for.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: BackendResult<UserPage>,
    ) -> FetchOutcome {
        if ticket.seq != self.last_seq {
            log::debug!(
                "Dropping stale search response #{} (latest is #{})",
                ticket.seq,
                self.last_seq
            );
            return FetchOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(page) => {
                self.records = page.records;
                self.total = page.total;
                FetchOutcome::Applied
            }
            Err(err) => {
                let notice = Notice::from_backend(&err);
                self.notices.push(notice.clone());
                FetchOutcome::Failed(notice)
            }
        }
    }

    /// Records the result of a freeze call. On success the current search is
    /// reissued; the row itself is left untouched until that search completes.
    pub fn complete_freeze(&mut self, result: BackendResult<()>) -> Option<FetchTicket> {
        match result {
            Ok(()) => {
                self.notices.push(Notice::success(FREEZE_SUCCESS_MESSAGE));
                Some(self.refetch())
            }
            Err(err) => {
                self.notices.push(Notice::from_backend(&err));
                None
            }
        }
    }

    fn issue(&mut self) -> FetchTicket {
        self.last_seq += 1;
        self.pending = Some(self.last_seq);
        FetchTicket {
            seq: self.last_seq,
            query: SearchQuery::new(self.page).filter(self.filter.clone()),
        }
    }
}
