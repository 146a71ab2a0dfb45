//! Offer Id Generation

use uuid::Uuid;

use crate::offers::OfferId;

/// Source of fresh offer ids for cloned offers.
pub trait IdGenerator {
    /// Produce the next id.
    fn next_id(&mut self) -> OfferId;
}

/// Time-ordered UUID v7 ids, e.g. `offer-0190b4c3...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> OfferId {
        OfferId::new(format!("offer-{}", Uuid::now_v7().simple()))
    }
}

/// Deterministic `<prefix>-<n>` ids, starting at 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Count up from `<prefix>-1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> OfferId {
        let id = OfferId::new(format!("{}-{}", self.prefix, self.next));

        self.next += 1;

        id
    }
}
