//! Offer Books
//!
//! Offers persisted as a YAML document (`offers: [...]`), used by the CLI as a local data source
//! and by tests as fixtures.

use std::{fs, path::Path, str::FromStr};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::offers::{Offer, OfferId};

const DEMO_BOOK: &str = include_str!("../../fixtures/offers/demo.yml");

/// Offer book errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading or writing the book
    #[error("Failed to access offer book: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialising error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two offers share an id
    #[error("Duplicate offer id: {0}")]
    DuplicateId(OfferId),
}

/// A list of offers stored as YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferBook {
    /// Offers in list order
    pub offers: Vec<Offer>,
}

impl OfferBook {
    /// Wrap offers, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::DuplicateId`] for the first repeated id.
    pub fn new(offers: Vec<Offer>) -> Result<Self, FixtureError> {
        let mut seen = FxHashSet::default();

        for offer in &offers {
            if !seen.insert(&offer.id) {
                return Err(FixtureError::DuplicateId(offer.id.clone()));
            }
        }

        Ok(Self { offers })
    }

    /// The bundled demo book.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled YAML is malformed.
    pub fn demo() -> Result<Self, FixtureError> {
        DEMO_BOOK.parse()
    }

    /// Read a book from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds duplicate ids.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        fs::read_to_string(path)?.parse()
    }

    /// Write the book to disk as YAML, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the book cannot be serialised or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FixtureError> {
        fs::write(path, self.to_yaml()?)?;

        Ok(())
    }

    /// Serialise the book as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_yaml(&self) -> Result<String, FixtureError> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Consume the book, returning its offers.
    pub fn into_offers(self) -> Vec<Offer> {
        self.offers
    }
}

impl FromStr for OfferBook {
    type Err = FixtureError;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        let book: Self = serde_norway::from_str(yaml)?;

        Self::new(book.offers)
    }
}
