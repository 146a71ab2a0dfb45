//! Status Selectors

use crate::offers::OfferStatus;

/// A selected status filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSelector {
    /// `published`: live offers only.
    Published,

    /// `inactive`: anything that is not published.
    Inactive,

    /// A specific status, e.g. `draft`.
    Exactly(OfferStatus),

    /// A value naming no status; matches nothing.
    Unrecognised,
}

impl StatusSelector {
    /// Whether an offer in `status` is selected.
    #[must_use]
    pub fn matches(self, status: OfferStatus) -> bool {
        match self {
            Self::Published => status == OfferStatus::Published,
            Self::Inactive => status != OfferStatus::Published,
            Self::Exactly(expected) => status == expected,
            Self::Unrecognised => false,
        }
    }
}

impl From<&str> for StatusSelector {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "published" => Self::Published,
            "inactive" => Self::Inactive,
            other => other.parse().map_or(Self::Unrecognised, Self::Exactly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_is_inactive_but_not_published() {
        assert!(StatusSelector::from("inactive").matches(OfferStatus::Draft));
        assert!(!StatusSelector::from("published").matches(OfferStatus::Draft));
        assert!(StatusSelector::from("published").matches(OfferStatus::Published));
    }

    #[test]
    fn exact_selectors_match_their_status_only() {
        let selector = StatusSelector::from("expired");

        assert_eq!(selector, StatusSelector::Exactly(OfferStatus::Expired));
        assert!(selector.matches(OfferStatus::Expired));
        assert!(!selector.matches(OfferStatus::Archived));
    }

    #[test]
    fn selectors_ignore_case() {
        assert_eq!(StatusSelector::from("Inactive"), StatusSelector::Inactive);
        assert_eq!(StatusSelector::from("PUBLISHED"), StatusSelector::Published);
        assert_eq!(
            StatusSelector::from("DRAFT"),
            StatusSelector::Exactly(OfferStatus::Draft)
        );
    }

    #[test]
    fn unknown_selector_matches_nothing() {
        let selector = StatusSelector::from("live");

        assert!(OfferStatus::ALL.into_iter().all(|status| !selector.matches(status)));
    }
}
