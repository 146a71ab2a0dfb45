//! Offer Listing
//!
//! Composes the text and structured filter stages, orders the survivors and slices them into
//! pages for display.

use std::cmp::Reverse;

use jiff::civil::Date;

use crate::{
    filters::{FilterSet, FilterTag},
    offers::Offer,
    search::search_offers,
};

mod pagination;
mod render;

pub use pagination::{Page, Pagination};
pub use render::RenderError;

/// Run the full filter pipeline over `offers`.
///
/// The text stage runs only when the filter set carries a non-blank query; its output order
/// (fuzzy relevance, then keyword additions) is preserved. The structured stage then keeps
/// offers satisfying every selected category.
pub fn filter_offers<'a>(
    offers: &'a [Offer],
    filters: &FilterSet,
    today: Date,
) -> Vec<&'a Offer> {
    let candidates = if filters.has_text_query() {
        search_offers(offers, filters.search_terms())
    } else {
        offers.iter().collect()
    };

    if filters.is_unstructured() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|offer| filters.matches(offer, today))
        .collect()
}

/// Stable sort by end date, latest first; open-ended offers last.
pub fn sort_newest_first(offers: &mut [&Offer]) {
    offers.sort_by_key(|offer| (offer.end_date.is_none(), Reverse(offer.end_date)));
}

/// Selected filters plus the current page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    filters: Vec<FilterTag>,
    pagination: Pagination,
}

impl ListState {
    /// Start from the given filters on the first page.
    pub fn with_filters(filters: Vec<FilterTag>) -> Self {
        Self {
            filters,
            pagination: Pagination::default(),
        }
    }

    /// Selected filter tags.
    pub fn filters(&self) -> &[FilterTag] {
        &self.filters
    }

    /// Current pagination.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Replace the selected filters, keeping the page.
    pub fn set_filters(&mut self, filters: Vec<FilterTag>) {
        self.filters = filters;
    }

    /// Add one filter unless an identical value is already selected.
    pub fn add_filter(&mut self, tag: FilterTag) {
        if !self.filters.iter().any(|existing| existing.value == tag.value) {
            self.filters.push(tag);
        }
    }

    /// Drop every filter and return to the first page.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.pagination.page = 1;
    }

    /// Move to `page` (1-based).
    pub fn set_page(&mut self, page: usize) {
        self.pagination.page = page.max(1);
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination = Pagination::new(1, page_size);
    }

    /// Filter, sort newest first and paginate `offers`.
    pub fn view<'a>(&self, offers: &'a [Offer], today: Date) -> Page<'a> {
        let filters = FilterSet::from_tags(&self.filters);
        let mut results = filter_offers(offers, &filters, today);

        sort_newest_first(&mut results);

        self.pagination.paginate(results)
    }
}
