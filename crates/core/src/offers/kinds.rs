//! Offer & Redemption Types
//!
//! Offer types arrive from the API as open-ended strings (`percent_off`, `bogo`, ...), so they
//! are kept as string newtypes and classified into a closed [`OfferCategory`] on demand.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Offer type, e.g. `percent_off`, `bogo` or `cashback`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferType(String);

impl OfferType {
    /// Create an offer type from its wire name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The broad category this type belongs to.
    #[must_use]
    pub fn category(&self) -> OfferCategory {
        match self.0.as_str() {
            "percent_off" | "percentage_savings" | "dollars_off" | "price_point" | "cashback" => {
                OfferCategory::Discount
            }
            "bogo" | "free_with_purchase" | "spend_and_get" => OfferCategory::Bundle,
            "loyalty_points" => OfferCategory::Loyalty,
            _ => OfferCategory::Promotional,
        }
    }
}

impl Display for OfferType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for OfferType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OfferType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Redemption method, e.g. `online_code` or `in_store`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedemptionType(String);

impl RedemptionType {
    /// Create a redemption type from its wire name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RedemptionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for RedemptionType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Broad grouping of offer types used by the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferCategory {
    /// Money off: percentage, fixed amount, price point, cashback.
    Discount,

    /// Buy-something-get-something offers.
    Bundle,

    /// Points and rewards.
    Loyalty,

    /// Everything else (clickthroughs, awareness offers, unknown types).
    Promotional,
}

impl OfferCategory {
    /// The filter payload name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discount => "discount",
            Self::Bundle => "bundle",
            Self::Loyalty => "loyalty",
            Self::Promotional => "promotional",
        }
    }
}

/// Unrecognised category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown offer category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for OfferCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [
            Self::Discount,
            Self::Bundle,
            Self::Loyalty,
            Self::Promotional,
        ]
        .into_iter()
        .find(|category| category.as_str().eq_ignore_ascii_case(value))
        .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}
