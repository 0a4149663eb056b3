use serde::Serialize;

use crate::domain::page::PageState;
use crate::domain::types::{PageNo, PageSize};
use crate::domain::user::SearchFilter;
use crate::dto::users::console_url;

/// Pages shown before the current one when the total is unknown.
const TRAILING_WINDOW: usize = 4;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current + 1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// First page, a gap when needed, then a bounded run up to `current_page`.
fn trailing_pages(current_page: usize) -> Vec<Option<usize>> {
    let start = current_page.saturating_sub(TRAILING_WINDOW).max(2);
    let mut pages = vec![Some(1)];
    if start > 2 {
        pages.push(None);
    }
    pages.extend((start..=current_page).map(Some));
    pages
}

/// One entry of the pager; `href` is `None` for a gap.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    pub href: Option<String>,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SizeOption {
    pub size: usize,
    pub href: String,
    pub selected: bool,
}

/// Pagination control of the user table. Every link carries the committed filter.
#[derive(Debug, Clone, Serialize)]
pub struct Pager {
    pub page_no: usize,
    pub page_size: usize,
    pub total: Option<usize>,
    pub links: Vec<PageLink>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub sizes: Vec<SizeOption>,
}

impl Pager {
    /// `shown` is the number of records on the current page; it decides
    /// whether a next page is offered when the total is unknown.
    pub fn new(
        filter: &SearchFilter,
        page: PageState,
        total: Option<usize>,
        shown: usize,
        size_options: &[usize],
    ) -> Self {
        let current = page.page_no.get();
        let size = page.page_size.get();
        let href = |page_no: usize| console_url(filter, with_page_no(page, page_no));

        let (numbers, has_next) = match total {
            Some(total) => {
                let total_pages = total.div_ceil(size);
                (get_pages(total_pages, current, 2, 2, 4, 2), current < total_pages)
            }
            None => (trailing_pages(current), shown >= size),
        };

        let links = numbers
            .into_iter()
            .map(|number| match number {
                Some(number) => PageLink {
                    label: number.to_string(),
                    href: Some(href(number)),
                    current: number == current,
                },
                None => PageLink {
                    label: "…".to_string(),
                    href: None,
                    current: false,
                },
            })
            .collect();

        let sizes = size_options
            .iter()
            .filter_map(|&option| PageSize::new(option).ok())
            .map(|option| {
                let page_no = match total {
                    Some(total) => current.min(total.div_ceil(option.get()).max(1)),
                    None => current,
                };
                SizeOption {
                    size: option.get(),
                    href: console_url(filter, PageState::new(page_no_or_first(page_no), option)),
                    selected: option == page.page_size,
                }
            })
            .collect();

        Self {
            page_no: current,
            page_size: size,
            total,
            links,
            prev: (current > 1).then(|| href(current - 1)),
            next: has_next
                .then(|| current.checked_add(1))
                .flatten()
                .map(&href),
            sizes,
        }
    }
}

fn page_no_or_first(value: usize) -> PageNo {
    PageNo::new(value).unwrap_or(PageNo::FIRST)
}

fn with_page_no(page: PageState, page_no: usize) -> PageState {
    PageState::new(page_no_or_first(page_no), page.page_size)
}
