//! Offerdesk application layer: configuration, logging and the offers REST API client.

pub mod config;
pub mod context;
pub mod domain;
pub mod observability;

#[cfg(test)]
mod test;
