//! Offerdesk
//!
//! Offerdesk is the offer list engine behind the merchant offer manager: fuzzy and keyword text
//! search, structured filter tags, pagination, and a reducer for the list's bulk actions.

pub mod filters;
pub mod fixtures;
pub mod listing;
pub mod offers;
pub mod prelude;
pub mod search;
pub mod store;
