//! Offers

mod envelope;
pub mod errors;
pub mod records;
pub mod service;

pub use errors::OffersServiceError;
pub use service::*;
