use serde::Serialize;

use crate::domain::types::{PageNo, PageSize};

/// Page size used when neither the request nor the configuration sets one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current position of the result table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageState {
    pub page_no: PageNo,
    pub page_size: PageSize,
}

impl PageState {
    pub fn new(page_no: PageNo, page_size: PageSize) -> Self {
        Self { page_no, page_size }
    }

    /// First page with the given size.
    pub fn first(page_size: PageSize) -> Self {
        Self::new(PageNo::FIRST, page_size)
    }

    /// Builds a page state from loosely typed request values. Missing or zero
    /// values fall back to page one and `default_size`.
    pub fn from_raw(page_no: Option<usize>, page_size: Option<usize>, default_size: PageSize) -> Self {
        let page_no = page_no
            .and_then(|value| PageNo::new(value).ok())
            .unwrap_or(PageNo::FIRST);
        let page_size = page_size
            .and_then(|value| PageSize::new(value).ok())
            .unwrap_or(default_size);
        Self { page_no, page_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(value: usize) -> PageSize {
        PageSize::new(value).expect("valid page size")
    }

    #[test]
    fn from_raw_falls_back_on_missing_or_zero_values() {
        let state = PageState::from_raw(None, Some(0), size(10));
        assert_eq!(state, PageState::first(size(10)));

        let state = PageState::from_raw(Some(0), None, size(20));
        assert_eq!(state.page_no, PageNo::FIRST);
        assert_eq!(state.page_size.get(), 20);
    }

    #[test]
    fn from_raw_keeps_valid_values() {
        let state = PageState::from_raw(Some(4), Some(50), size(10));
        assert_eq!(state.page_no.get(), 4);
        assert_eq!(state.page_size.get(), 50);
    }
}
