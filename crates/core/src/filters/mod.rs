//! Filter Tags
//!
//! The offer list is filtered through tags such as `merchant:m-1`, `status:inactive` or
//! `search:pizza`. Tags are bucketed per category into a [`FilterSet`]; buckets combine with AND,
//! values inside a bucket combine with OR.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    filters::{dates::DateRange, status::StatusSelector},
    offers::{
        Offer,
        kinds::{OfferCategory, OfferType, RedemptionType},
        performance::PerformanceTier,
    },
};

pub mod dates;
pub mod status;

/// Filter parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Tag value has no `category:` prefix
    #[error("filter tag {0:?} is missing a \"category:\" prefix")]
    MissingSeparator(String),

    /// Tag prefix names no known category
    #[error("unknown filter category: {0}")]
    UnknownCategory(String),
}

/// Filter tag category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCategory {
    /// Free text.
    Search,

    /// Merchant id.
    Merchant,

    /// Offer type.
    Type,

    /// Status selector.
    Status,

    /// Offer category.
    Category,

    /// Performance tier.
    Performance,

    /// End date window.
    DateRange,

    /// Redemption type.
    RedemptionType,
}

impl FilterCategory {
    const ALL: [Self; 8] = [
        Self::Search,
        Self::Merchant,
        Self::Type,
        Self::Status,
        Self::Category,
        Self::Performance,
        Self::DateRange,
        Self::RedemptionType,
    ];

    /// The tag prefix for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Merchant => "merchant",
            Self::Type => "type",
            Self::Status => "status",
            Self::Category => "category",
            Self::Performance => "performance",
            Self::DateRange => "dateRange",
            Self::RedemptionType => "redemptionType",
        }
    }
}

impl Display for FilterCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| FilterError::UnknownCategory(value.to_string()))
    }
}

/// A single selected filter, e.g. `{ category: status, value: "status:published" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTag {
    /// Display label
    pub label: String,

    /// `category:payload` value
    pub value: String,

    /// Bucket this tag is sorted into
    pub category: FilterCategory,
}

impl FilterTag {
    /// Build a tag from a category and payload.
    pub fn new(category: FilterCategory, payload: &str) -> Self {
        let label = match category {
            FilterCategory::Search => format!("Search: {payload}"),
            _ => payload.to_string(),
        };

        Self {
            label,
            value: format!("{category}:{payload}"),
            category,
        }
    }

    /// Free-text search tag.
    pub fn search(text: &str) -> Self {
        Self::new(FilterCategory::Search, text)
    }

    /// Parse a `category:payload` value.
    ///
    /// # Errors
    ///
    /// Returns an error when the value has no `:` or the prefix is not a known category.
    pub fn parse(value: &str) -> Result<Self, FilterError> {
        let (prefix, payload) = value
            .split_once(':')
            .ok_or_else(|| FilterError::MissingSeparator(value.to_string()))?;

        Ok(Self::new(prefix.parse()?, payload))
    }

    /// Everything after the first `:` of the value.
    #[must_use]
    pub fn payload(&self) -> &str {
        self.value.split_once(':').map_or("", |(_, payload)| payload)
    }
}

/// Filter tags bucketed per category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    search_terms: Vec<String>,
    merchant_ids: SmallVec<[String; 4]>,
    offer_types: SmallVec<[OfferType; 4]>,
    statuses: SmallVec<[StatusSelector; 4]>,
    categories: SmallVec<[Option<OfferCategory>; 4]>,
    performance: SmallVec<[Option<PerformanceTier>; 3]>,
    date_ranges: SmallVec<[Option<DateRange>; 4]>,
    redemption_types: SmallVec<[RedemptionType; 4]>,
}

impl FilterSet {
    /// Bucket the given tags.
    ///
    /// Payloads that name no known category, tier or window are kept so that their bucket
    /// still constrains the results; they simply never match.
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a FilterTag>) -> Self {
        let mut set = Self::default();

        for tag in tags {
            let payload = tag.payload();

            match tag.category {
                FilterCategory::Search => set.search_terms.push(payload.to_string()),
                FilterCategory::Merchant => set.merchant_ids.push(payload.to_string()),
                FilterCategory::Type => set.offer_types.push(OfferType::from(payload)),
                FilterCategory::Status => set.statuses.push(StatusSelector::from(payload)),
                FilterCategory::Category => set.categories.push(payload.parse().ok()),
                FilterCategory::Performance => set.performance.push(payload.parse().ok()),
                FilterCategory::DateRange => set.date_ranges.push(payload.parse().ok()),
                FilterCategory::RedemptionType => {
                    set.redemption_types.push(RedemptionType::from(payload));
                }
            }
        }

        set
    }

    /// Parse and bucket raw `category:payload` values.
    ///
    /// # Errors
    ///
    /// Returns the first tag parsing error.
    pub fn parse<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> Result<Self, FilterError> {
        let tags = values
            .into_iter()
            .map(|value| FilterTag::parse(value.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_tags(&tags))
    }

    /// Free-text search terms, in selection order.
    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    /// The combined free-text query: all search terms joined by a space.
    pub fn query(&self) -> String {
        self.search_terms.join(" ")
    }

    /// Whether the text search stage has anything to do.
    pub fn has_text_query(&self) -> bool {
        self.search_terms.iter().any(|term| !term.trim().is_empty())
    }

    /// Whether no structured (non-search) filter is selected.
    pub fn is_unstructured(&self) -> bool {
        self.merchant_ids.is_empty()
            && self.offer_types.is_empty()
            && self.statuses.is_empty()
            && self.categories.is_empty()
            && self.performance.is_empty()
            && self.date_ranges.is_empty()
            && self.redemption_types.is_empty()
    }

    /// Structured stage: AND across categories, OR within a category.
    pub fn matches(&self, offer: &Offer, today: Date) -> bool {
        bucket_matches(&self.merchant_ids, |id| *id == offer.merchant_id)
            && bucket_matches(&self.offer_types, |offer_type| *offer_type == offer.offer_type)
            && bucket_matches(&self.statuses, |selector| {
                selector.matches(offer.offer_status)
            })
            && bucket_matches(&self.categories, |category| {
                *category == Some(offer.offer_type.category())
            })
            && bucket_matches(&self.performance, |tier| {
                *tier == Some(offer.performance())
            })
            && bucket_matches(&self.date_ranges, |range| {
                range.is_some_and(|range| range.matches(offer.end_date, today))
            })
            && bucket_matches(&self.redemption_types, |redemption_type| {
                offer.redemption_type.as_ref() == Some(redemption_type)
            })
    }
}

fn bucket_matches<T>(bucket: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    bucket.is_empty() || bucket.iter().any(predicate)
}
