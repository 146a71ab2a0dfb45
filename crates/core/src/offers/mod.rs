//! Offers
//!
//! A merchant offer as it appears in the offer list: identity, merchant, type, lifecycle status
//! and the counters the list ranks and filters by.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::offers::{
    kinds::{OfferType, RedemptionType},
    performance::PerformanceTier,
};

pub mod kinds;
pub mod performance;
mod status;

pub use status::{OfferStatus, UnknownStatus};

/// Offer identifier, unique within a store or offer book.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    /// Create an offer id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OfferId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for OfferId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OfferId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Offer list row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Unique offer id
    pub id: OfferId,

    /// Display name
    pub offer_name: String,

    /// Owning merchant id
    pub merchant_id: String,

    /// Owning merchant display name
    pub merchant_name: String,

    /// Offer type, e.g. `percent_off`
    pub offer_type: OfferType,

    /// Lifecycle status
    pub offer_status: OfferStatus,

    /// Redemption counter
    #[serde(default)]
    pub redemptions: u64,

    /// How the offer is redeemed, e.g. `online_code`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemption_type: Option<RedemptionType>,

    /// First day the offer runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    /// Last day the offer runs; `None` means it never expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
}

impl Offer {
    /// Create a draft offer with no redemptions, redemption type or schedule.
    pub fn draft(
        id: impl Into<OfferId>,
        offer_name: impl Into<String>,
        merchant_id: impl Into<String>,
        merchant_name: impl Into<String>,
        offer_type: impl Into<OfferType>,
    ) -> Self {
        Self {
            id: id.into(),
            offer_name: offer_name.into(),
            merchant_id: merchant_id.into(),
            merchant_name: merchant_name.into(),
            offer_type: offer_type.into(),
            offer_status: OfferStatus::Draft,
            redemptions: 0,
            redemption_type: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Returns the offer with the given status.
    #[must_use]
    pub fn with_status(mut self, status: OfferStatus) -> Self {
        self.offer_status = status;
        self
    }

    /// Returns the offer with the given redemption count.
    #[must_use]
    pub fn with_redemptions(mut self, redemptions: u64) -> Self {
        self.redemptions = redemptions;
        self
    }

    /// Returns the offer with the given end date.
    #[must_use]
    pub fn with_end_date(mut self, end_date: Date) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Returns the offer with the given redemption type.
    #[must_use]
    pub fn with_redemption_type(mut self, redemption_type: impl Into<RedemptionType>) -> Self {
        self.redemption_type = Some(redemption_type.into());
        self
    }

    /// Whether the offer is live.
    pub fn is_published(&self) -> bool {
        self.offer_status == OfferStatus::Published
    }

    /// Performance tier derived from the redemption counter.
    pub fn performance(&self) -> PerformanceTier {
        PerformanceTier::from_redemptions(self.redemptions)
    }

    /// Copy this offer under a new id: reset to draft with no redemptions.
    #[must_use]
    pub fn clone_as(&self, id: OfferId) -> Self {
        Self {
            id,
            offer_name: format!("{} (Copy)", self.offer_name),
            offer_status: OfferStatus::Draft,
            redemptions: 0,
            ..self.clone()
        }
    }
}
