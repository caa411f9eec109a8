//! Pagination types
//!
//! The catalog is consumed as a sequence of pages addressed by a 1-based
//! page cursor. [`Page`] carries the navigation keys for both directions;
//! an empty page is the end-of-stream sentinel, not an error.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// The largest page size the remote catalog accepts.
pub const MAX_PAGE_SIZE: usize = 20;

/// A request for one page of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page cursor.
    pub page_index: u32,
    /// Requested number of items; clamped before it reaches the wire.
    pub page_size: usize,
}

impl PageRequest {
    /// Creates a validated page request.
    ///
    /// # Errors
    /// Returns an error if `page_index` is below 1 or `page_size` is zero.
    pub fn new(page_index: u32, page_size: usize) -> DomainResult<Self> {
        if page_index == 0 {
            return Err(DomainError::InvalidPageIndex(page_index));
        }
        if page_size == 0 {
            return Err(DomainError::ZeroPageSize);
        }
        Ok(Self {
            page_index,
            page_size,
        })
    }

    /// The size actually sent to the remote service: `min(page_size, max)`.
    #[must_use]
    pub fn effective_size(&self, max: usize) -> usize {
        self.page_size.min(max)
    }
}

/// One loaded page plus its navigation keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in catalog order.
    pub items: Vec<T>,
    /// Key of the previous page; `None` on the first page.
    pub prev_key: Option<u32>,
    /// Key of the next page; `None` once the stream is exhausted.
    pub next_key: Option<u32>,
}

impl<T> Page<T> {
    /// Assembles a page from a fetch outcome, deriving both keys.
    ///
    /// `prev_key` depends only on the index; `next_key` is present unless
    /// the fetch came back empty.
    #[must_use]
    pub fn assemble(page_index: u32, items: Vec<T>) -> Self {
        let next_key = if items.is_empty() {
            None
        } else {
            Some(page_index + 1)
        };
        Self {
            items,
            prev_key: prev_key_for(page_index),
            next_key,
        }
    }

    /// True when this page is the end-of-stream sentinel.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.next_key.is_none()
    }

    /// Number of items on this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page carries no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The backward navigation key for a page index, independent of any fetch
/// outcome: `None` for page 1, `page_index - 1` otherwise.
#[must_use]
pub const fn prev_key_for(page_index: u32) -> Option<u32> {
    if page_index <= 1 {
        None
    } else {
        Some(page_index - 1)
    }
}

/// Computes the page key a refresh should resume from.
///
/// `anchor` is a flat item position across `pages` (the presentation layer's
/// last-viewed position). The nearest loaded page containing the anchor is
/// located (the last page if the anchor lies beyond the loaded range), and
/// its key is recomputed as `prev_key + 1`, falling back to `next_key - 1`.
/// With no loaded pages, or a page with neither key, the refresh resumes at
/// page 1.
#[must_use]
pub fn refresh_key<T>(anchor: usize, pages: &[Page<T>]) -> u32 {
    let mut seen = 0;
    let mut nearest = None;
    for page in pages {
        if anchor < seen + page.len() {
            nearest = Some(page);
            break;
        }
        seen += page.len();
    }

    nearest
        .or_else(|| pages.last())
        .map_or(1, |page| {
            page.prev_key
                .map(|key| key + 1)
                .or_else(|| page.next_key.map(|key| key - 1))
                .unwrap_or(1)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_page_has_no_prev_key() {
        let page = Page::assemble(1, vec![1, 2, 3]);
        assert_eq!(page.prev_key, None);
        assert_eq!(page.next_key, Some(2));
    }

    #[test]
    fn later_pages_have_exact_prev_key() {
        for index in 2..10 {
            let page = Page::assemble(index, vec![0]);
            assert_eq!(page.prev_key, Some(index - 1));
        }
    }

    #[test]
    fn empty_page_is_end_of_stream() {
        let page: Page<u8> = Page::assemble(2, vec![]);
        assert_eq!(page.next_key, None);
        assert_eq!(page.prev_key, Some(1));
        assert!(page.is_end());
    }

    #[test]
    fn next_key_absent_iff_empty_regardless_of_size() {
        let full = Page::assemble(3, vec![0; 20]);
        let single = Page::assemble(3, vec![0]);
        let empty: Page<u8> = Page::assemble(3, vec![]);
        assert_eq!(full.next_key, Some(4));
        assert_eq!(single.next_key, Some(4));
        assert_eq!(empty.next_key, None);
    }

    #[test]
    fn effective_size_is_clamped() {
        let request = PageRequest::new(1, 25).unwrap();
        assert_eq!(request.effective_size(MAX_PAGE_SIZE), 20);
        let small = PageRequest::new(1, 5).unwrap();
        assert_eq!(small.effective_size(MAX_PAGE_SIZE), 5);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(0, 10).is_err());
    }

    #[test]
    fn refresh_key_uses_prev_key_plus_one() {
        let pages = vec![Page::assemble(1, vec![0; 3]), Page::assemble(2, vec![0; 3])];
        // Anchor inside page 2: prev_key is 1, resume at 2.
        assert_eq!(refresh_key(4, &pages), 2);
    }

    #[test]
    fn refresh_key_falls_back_to_next_key_minus_one() {
        let pages = vec![Page::assemble(1, vec![0; 3])];
        // Page 1 has no prev_key; next_key is 2, resume at 1.
        assert_eq!(refresh_key(0, &pages), 1);
    }

    #[test]
    fn refresh_key_past_loaded_range_uses_last_page() {
        let pages = vec![Page::assemble(1, vec![0; 3]), Page::assemble(2, vec![0; 3])];
        assert_eq!(refresh_key(100, &pages), 2);
    }

    #[test]
    fn refresh_key_without_pages_resumes_at_one() {
        let pages: Vec<Page<u8>> = vec![];
        assert_eq!(refresh_key(0, &pages), 1);
    }
}
