//! Paginator.
//!
//! Pages are 1-based. Requests past the last page yield an empty slice
//! rather than an error.

use serde::Serialize;

/// Number of cards per page.
pub const PAGE_SIZE: usize = 20;

/// Number of pages needed for `len` items (0 if no items).
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The items on `page`, clamped to the bounds of `items`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Which page of the filtered roster is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Back to page 1; called whenever the filtered roster is recomputed.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Select a page. Page 0 is treated as page 1; pages past the end are
    /// kept and render as empty.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn is_active(&self, page: usize) -> bool {
        page == self.current_page
    }

    pub fn page_count(&self, len: usize) -> usize {
        page_count(len, self.page_size)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.current_page, self.page_size)
    }

    /// One button per page, the current one marked active.
    pub fn buttons(&self, len: usize) -> Vec<PageButton> {
        (1..=self.page_count(len))
            .map(|number| PageButton {
                number,
                active: self.is_active(number),
            })
            .collect()
    }
}
