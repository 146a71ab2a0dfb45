//! Offerdesk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    filters::{
        FilterCategory, FilterError, FilterSet, FilterTag, dates::DateRange,
        status::StatusSelector,
    },
    fixtures::{FixtureError, OfferBook},
    listing::{ListState, Page, Pagination, RenderError, filter_offers, sort_newest_first},
    offers::{
        Offer, OfferId, OfferStatus,
        kinds::{OfferCategory, OfferType, RedemptionType},
        performance::PerformanceTier,
    },
    search::{fuzzy::FuzzyOptions, search_offers},
    store::{Action, Changed, IdGenerator, OfferStore, SequentialIds, StoreError, UuidIds},
};
