//! Performance Tiers

use std::str::FromStr;

use thiserror::Error;

/// Redemption-based performance bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceTier {
    /// 100 or more redemptions.
    High,

    /// 10 to 99 redemptions.
    Medium,

    /// Fewer than 10 redemptions.
    Low,
}

impl PerformanceTier {
    /// Classify a redemption count.
    #[must_use]
    pub const fn from_redemptions(redemptions: u64) -> Self {
        if redemptions >= 100 {
            Self::High
        } else if redemptions >= 10 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// The filter payload name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Unrecognised tier name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown performance tier: {0}")]
pub struct UnknownTier(pub String);

impl FromStr for PerformanceTier {
    type Err = UnknownTier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [Self::High, Self::Medium, Self::Low]
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownTier(value.to_string()))
    }
}
