//! Offer Source Config

use std::path::PathBuf;

use clap::Args;

/// Where offers are read from and written to.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceConfig {
    /// YAML offer book to use instead of the bundled demo book
    #[arg(long, env = "OFFERDESK_BOOK", global = true, conflicts_with = "remote")]
    pub book: Option<PathBuf>,

    /// Use the offers REST API instead of a local book
    #[arg(long, global = true)]
    pub remote: bool,
}
