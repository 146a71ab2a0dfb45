//! End Date Windows

use std::str::FromStr;

use jiff::{ToSpan, civil::Date};
use thiserror::Error;

/// End-date window relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// Ends within today's ISO week (Monday to Sunday).
    ThisWeek,

    /// Ends within today's calendar month.
    ThisMonth,

    /// Ends between today and 30 days from now, inclusive.
    Next30Days,

    /// Has no end date.
    NoExpiration,
}

impl DateRange {
    /// The filter payload name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThisWeek => "this_week",
            Self::ThisMonth => "this_month",
            Self::Next30Days => "30_days",
            Self::NoExpiration => "no_expiration",
        }
    }

    /// Whether an offer ending on `end_date` falls in this window.
    #[must_use]
    pub fn matches(self, end_date: Option<Date>, today: Date) -> bool {
        let Some(end) = end_date else {
            return self == Self::NoExpiration;
        };

        match self {
            Self::ThisWeek => {
                let (end_week, this_week) = (end.iso_week_date(), today.iso_week_date());

                end_week.year() == this_week.year() && end_week.week() == this_week.week()
            }
            Self::ThisMonth => end.year() == today.year() && end.month() == today.month(),
            Self::Next30Days => today <= end && end <= today.saturating_add(30.days()),
            Self::NoExpiration => false,
        }
    }
}

/// Unrecognised window name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date range: {0}")]
pub struct UnknownDateRange(pub String);

impl FromStr for DateRange {
    type Err = UnknownDateRange;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [
            Self::ThisWeek,
            Self::ThisMonth,
            Self::Next30Days,
            Self::NoExpiration,
        ]
        .into_iter()
        .find(|range| range.as_str() == value)
        .ok_or_else(|| UnknownDateRange(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    // A Wednesday.
    const TODAY: Date = date(2026, 3, 11);

    #[test]
    fn this_week_spans_monday_to_sunday() {
        assert!(DateRange::ThisWeek.matches(Some(date(2026, 3, 9)), TODAY));
        assert!(DateRange::ThisWeek.matches(Some(date(2026, 3, 15)), TODAY));
        assert!(!DateRange::ThisWeek.matches(Some(date(2026, 3, 16)), TODAY));
        assert!(!DateRange::ThisWeek.matches(Some(date(2025, 3, 12)), TODAY));
    }

    #[test]
    fn this_month_compares_calendar_month() {
        assert!(DateRange::ThisMonth.matches(Some(date(2026, 3, 31)), TODAY));
        assert!(!DateRange::ThisMonth.matches(Some(date(2026, 4, 1)), TODAY));
    }

    #[test]
    fn next_30_days_is_inclusive_and_forward_only() {
        assert!(DateRange::Next30Days.matches(Some(TODAY), TODAY));
        assert!(DateRange::Next30Days.matches(Some(date(2026, 4, 10)), TODAY));
        assert!(!DateRange::Next30Days.matches(Some(date(2026, 4, 11)), TODAY));
        assert!(!DateRange::Next30Days.matches(Some(date(2026, 3, 10)), TODAY));
    }

    #[test]
    fn open_ended_offers_only_match_no_expiration() {
        assert!(DateRange::NoExpiration.matches(None, TODAY));
        assert!(!DateRange::NoExpiration.matches(Some(TODAY), TODAY));
        assert!(!DateRange::ThisMonth.matches(None, TODAY));
    }
}
