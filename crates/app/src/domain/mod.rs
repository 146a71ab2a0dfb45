//! Offerdesk Domain Concerns

pub mod offers;
