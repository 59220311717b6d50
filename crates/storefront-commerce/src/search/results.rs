//! Page slicing and pagination info.

use serde::{Deserialize, Serialize};

/// The `page_index`-th page (1-indexed) of `list`.
///
/// Covers `[(page_index - 1) * page_size, page_index * page_size)`, clipped
/// to the list. Empty for page 0, a zero page size, or a page past the end.
pub fn page<T>(list: &[T], page_size: usize, page_index: usize) -> &[T] {
    if page_size == 0 || page_index == 0 {
        return &[];
    }
    let Some(start) = (page_index - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= list.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(list.len());
    &list[start..end]
}

/// Whether more results remain after `loaded` of `total`.
pub fn has_more(loaded: usize, total: usize) -> bool {
    loaded < total
}

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Pages loaded so far (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
        }
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        self.page.saturating_mul(self.per_page).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, crate::config::DEFAULT_PAGE_SIZE, 0)
    }
}
