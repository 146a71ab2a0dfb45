//! Pagination

use crate::offers::Offer;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 1-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page, starting at 1
    pub page: usize,

    /// Rows per page, at least 1
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Create a pagination; zero page numbers and sizes are raised to 1.
    #[must_use]
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Slice `offers` down to the selected page, clamping past-the-end pages to the last one.
    pub fn paginate<'a>(self, offers: Vec<&'a Offer>) -> Page<'a> {
        let page_size = self.page_size.max(1);
        let total = offers.len();
        let page_count = total.div_ceil(page_size).max(1);
        let page = self.page.clamp(1, page_count);

        let offers = offers
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        Page {
            offers,
            page,
            page_size,
            total,
            page_count,
        }
    }
}

/// One page of filtered offers.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// Offers on this page
    pub offers: Vec<&'a Offer>,

    /// Page number actually shown, after clamping
    pub page: usize,

    /// Rows per page
    pub page_size: usize,

    /// Offers across all pages
    pub total: usize,

    /// Number of pages, at least 1
    pub page_count: usize,
}

impl Page<'_> {
    /// 1-based inclusive row range shown, or `None` for an empty result.
    pub fn row_range(&self) -> Option<(usize, usize)> {
        if self.offers.is_empty() {
            return None;
        }

        let first = (self.page - 1) * self.page_size + 1;

        Some((first, first + self.offers.len() - 1))
    }
}
