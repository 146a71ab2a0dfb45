//! Offer Store
//!
//! The offer list's mutable state: a vector of offers changed only by dispatching [`Action`]s.
//! Every action reports the ids it touched so callers can log or persist the change.

use rustc_hash::FxHashSet;
use smallvec::{SmallVec, smallvec};
use thiserror::Error;

use crate::offers::{Offer, OfferId, OfferStatus};

mod ids;

pub use ids::{IdGenerator, SequentialIds, UuidIds};

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No offer has the given id
    #[error("offer not found: {0}")]
    NotFound(OfferId),

    /// An offer with the given id already exists
    #[error("duplicate offer id: {0}")]
    DuplicateId(OfferId),
}

/// Offer list actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Published becomes draft; any other status becomes published.
    TogglePublish(OfferId),

    /// Publish the drafts among the selection.
    Publish(Vec<OfferId>),

    /// Return the published offers among the selection to draft.
    Unpublish(Vec<OfferId>),

    /// Insert a draft copy directly after the source offer.
    Clone(OfferId),

    /// Remove an offer.
    Delete(OfferId),

    /// Append a new offer.
    Insert(Offer),

    /// Replace the offer with the same id.
    Replace(Offer),
}

/// Ids affected by a dispatched action.
pub type Changed = SmallVec<[OfferId; 4]>;

/// Offer list state.
#[derive(Debug, Clone)]
pub struct OfferStore<G = UuidIds> {
    offers: Vec<Offer>,
    ids: G,
}

impl OfferStore<UuidIds> {
    /// Create a store that names clones with UUID v7 ids.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two offers share an id.
    pub fn new(offers: Vec<Offer>) -> Result<Self, StoreError> {
        Self::with_ids(offers, UuidIds)
    }
}

impl<G: IdGenerator> OfferStore<G> {
    /// Create a store with a custom id generator.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two offers share an id.
    pub fn with_ids(offers: Vec<Offer>, ids: G) -> Result<Self, StoreError> {
        let mut seen = FxHashSet::default();

        if let Some(duplicate) = offers.iter().find(|offer| !seen.insert(&offer.id)) {
            return Err(StoreError::DuplicateId(duplicate.id.clone()));
        }

        Ok(Self { offers, ids })
    }

    /// Offers in list order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Look up an offer by id.
    pub fn get(&self, id: &OfferId) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.id == *id)
    }

    /// Consume the store, returning its offers.
    pub fn into_offers(self) -> Vec<Offer> {
        self.offers
    }

    /// Apply an action.
    ///
    /// Bulk actions check every id before changing anything, so a failed dispatch leaves the
    /// store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id, or [`StoreError::DuplicateId`] when
    /// inserting (or cloning to) an id that is already taken.
    pub fn dispatch(&mut self, action: Action) -> Result<Changed, StoreError> {
        match action {
            Action::TogglePublish(id) => {
                let offer = self.get_mut(&id)?;

                offer.offer_status = if offer.is_published() {
                    OfferStatus::Draft
                } else {
                    OfferStatus::Published
                };

                Ok(smallvec![id])
            }
            Action::Publish(ids) => {
                self.transition(&ids, OfferStatus::Draft, OfferStatus::Published)
            }
            Action::Unpublish(ids) => {
                self.transition(&ids, OfferStatus::Published, OfferStatus::Draft)
            }
            Action::Clone(id) => {
                let index = self.position(&id)?;
                let copy_id = self.ids.next_id();

                if self.get(&copy_id).is_some() {
                    return Err(StoreError::DuplicateId(copy_id));
                }

                let copy = self
                    .offers
                    .get(index)
                    .ok_or_else(|| StoreError::NotFound(id.clone()))?
                    .clone_as(copy_id.clone());

                self.offers.insert(index + 1, copy);

                Ok(smallvec![copy_id])
            }
            Action::Delete(id) => {
                let index = self.position(&id)?;

                self.offers.remove(index);

                Ok(smallvec![id])
            }
            Action::Insert(offer) => {
                if self.get(&offer.id).is_some() {
                    return Err(StoreError::DuplicateId(offer.id));
                }

                let id = offer.id.clone();

                self.offers.push(offer);

                Ok(smallvec![id])
            }
            Action::Replace(offer) => {
                let id = offer.id.clone();
                let existing = self.get_mut(&id)?;

                *existing = offer;

                Ok(smallvec![id])
            }
        }
    }

    fn position(&self, id: &OfferId) -> Result<usize, StoreError> {
        self.offers
            .iter()
            .position(|offer| offer.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    fn get_mut(&mut self, id: &OfferId) -> Result<&mut Offer, StoreError> {
        self.offers
            .iter_mut()
            .find(|offer| offer.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Move every selected offer in `from` to `to`; others in the selection are left alone.
    fn transition(
        &mut self,
        ids: &[OfferId],
        from: OfferStatus,
        to: OfferStatus,
    ) -> Result<Changed, StoreError> {
        if let Some(missing) = ids.iter().find(|id| self.get(id).is_none()) {
            return Err(StoreError::NotFound(missing.clone()));
        }

        let selected: FxHashSet<&OfferId> = ids.iter().collect();
        let mut changed = Changed::new();

        for offer in &mut self.offers {
            if offer.offer_status == from && selected.contains(&offer.id) {
                offer.offer_status = to;
                changed.push(offer.id.clone());
            }
        }

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn store() -> TestResult<OfferStore<SequentialIds>> {
        let offers = vec![
            Offer::draft("a", "Spring sale", "m-1", "CVS Pharmacy", "percent_off"),
            Offer::draft("b", "Rent week", "m-2", "Yardi", "dollars_off")
                .with_status(OfferStatus::Published)
                .with_redemptions(30),
            Offer::draft("c", "Pizza Friday", "m-3", "Deacon's Pizza", "bogo")
                .with_status(OfferStatus::Expired),
        ];

        Ok(OfferStore::with_ids(offers, SequentialIds::new("copy"))?)
    }

    fn status(store: &OfferStore<SequentialIds>, id: &str) -> Option<OfferStatus> {
        store.get(&OfferId::from(id)).map(|offer| offer.offer_status)
    }

    #[test]
    fn toggle_flips_published_and_draft() -> TestResult {
        let mut store = store()?;

        store.dispatch(Action::TogglePublish("a".into()))?;
        store.dispatch(Action::TogglePublish("b".into()))?;
        store.dispatch(Action::TogglePublish("c".into()))?;

        assert_eq!(status(&store, "a"), Some(OfferStatus::Published));
        assert_eq!(status(&store, "b"), Some(OfferStatus::Draft));
        assert_eq!(status(&store, "c"), Some(OfferStatus::Published));

        Ok(())
    }

    #[test]
    fn publish_only_changes_drafts() -> TestResult {
        let mut store = store()?;

        let changed = store.dispatch(Action::Publish(vec!["a".into(), "b".into(), "c".into()]))?;

        assert_eq!(changed.as_slice(), [OfferId::from("a")]);
        assert_eq!(status(&store, "c"), Some(OfferStatus::Expired));

        Ok(())
    }

    #[test]
    fn unpublish_only_changes_published() -> TestResult {
        let mut store = store()?;

        let changed = store.dispatch(Action::Unpublish(vec!["a".into(), "b".into()]))?;

        assert_eq!(changed.as_slice(), [OfferId::from("b")]);
        assert_eq!(status(&store, "a"), Some(OfferStatus::Draft));
        assert_eq!(status(&store, "b"), Some(OfferStatus::Draft));

        Ok(())
    }

    #[test]
    fn bulk_action_with_unknown_id_changes_nothing() -> TestResult {
        let mut store = store()?;

        let result = store.dispatch(Action::Publish(vec!["a".into(), "zzz".into()]));

        assert_eq!(result, Err(StoreError::NotFound("zzz".into())));
        assert_eq!(status(&store, "a"), Some(OfferStatus::Draft));

        Ok(())
    }

    #[test]
    fn clone_inserts_draft_copy_after_source() -> TestResult {
        let mut store = store()?;

        let changed = store.dispatch(Action::Clone("b".into()))?;

        assert_eq!(changed.as_slice(), [OfferId::from("copy-1")]);

        let ids: Vec<&str> = store.offers().iter().map(|offer| offer.id.as_str()).collect();

        assert_eq!(ids, ["a", "b", "copy-1", "c"]);

        let copy = store.get(&"copy-1".into()).ok_or("missing copy")?;

        assert_eq!(copy.offer_name, "Rent week (Copy)");
        assert_eq!(copy.offer_status, OfferStatus::Draft);
        assert_eq!(copy.redemptions, 0);

        Ok(())
    }

    #[test]
    fn delete_insert_and_replace() -> TestResult {
        let mut store = store()?;

        store.dispatch(Action::Delete("a".into()))?;

        assert!(store.get(&"a".into()).is_none());
        assert_eq!(
            store.dispatch(Action::Delete("a".into())),
            Err(StoreError::NotFound("a".into()))
        );

        let new = Offer::draft("d", "Free knots", "m-3", "Deacon's Pizza", "free_with_purchase");

        store.dispatch(Action::Insert(new.clone()))?;

        assert_eq!(
            store.dispatch(Action::Insert(new.clone())),
            Err(StoreError::DuplicateId("d".into()))
        );

        store.dispatch(Action::Replace(new.with_redemptions(12)))?;

        assert_eq!(store.get(&"d".into()).map(|offer| offer.redemptions), Some(12));
        assert_eq!(
            store.dispatch(Action::Replace(Offer::draft("x", "x", "m", "m", "bogo"))),
            Err(StoreError::NotFound("x".into()))
        );

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected_on_creation() {
        let offers = vec![
            Offer::draft("a", "One", "m", "M", "bogo"),
            Offer::draft("a", "Two", "m", "M", "bogo"),
        ];

        assert_eq!(
            OfferStore::new(offers).map(|store| store.offers().len()),
            Err(StoreError::DuplicateId("a".into()))
        );
    }
}
