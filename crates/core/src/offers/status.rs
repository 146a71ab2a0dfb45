//! Offer Status

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Offer lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    /// Being edited, not visible to customers.
    Draft,

    /// Live.
    Published,

    /// Temporarily halted.
    Paused,

    /// Waiting on a reviewer.
    PendingApproval,

    /// Past its end date.
    Expired,

    /// Retired.
    Archived,
}

impl OfferStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 6] = [
        Self::Published,
        Self::Draft,
        Self::Paused,
        Self::PendingApproval,
        Self::Expired,
        Self::Archived,
    ];

    /// The wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Paused => "paused",
            Self::PendingApproval => "pending_approval",
            Self::Expired => "expired",
            Self::Archived => "archived",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Paused => "Paused",
            Self::PendingApproval => "Pending Approval",
            Self::Expired => "Expired",
            Self::Archived => "Archived",
        }
    }
}

impl Display for OfferStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Unrecognised status name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown offer status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OfferStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_parse_from_wire_names() {
        assert_eq!("draft".parse(), Ok(OfferStatus::Draft));
        assert_eq!("Published".parse(), Ok(OfferStatus::Published));
        assert_eq!("pending_approval".parse(), Ok(OfferStatus::PendingApproval));
        assert_eq!(
            "live".parse::<OfferStatus>(),
            Err(UnknownStatus("live".to_string()))
        );
    }
}
