//! Configuration
//!
//! Flattened `clap` argument groups, each falling back to environment variables (and `.env`).

pub mod api;
pub mod observability;
pub mod source;

pub use api::ApiConfig;
pub use observability::{LogFormat, LoggingConfig};
pub use source::SourceConfig;
