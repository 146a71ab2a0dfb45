//! Offers API Config

use std::time::Duration;

use clap::Args;

/// Offers REST API settings.
#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// Base URL of the offers API, e.g. `https://offers.example.com/api`
    #[arg(long = "api-url", env = "OFFERDESK_API_URL", global = true)]
    pub url: Option<String>,

    /// Bearer token sent with every API request
    #[arg(
        long = "api-token",
        env = "OFFERDESK_API_TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long = "api-timeout-seconds",
        env = "OFFERDESK_API_TIMEOUT_SECONDS",
        default_value_t = 10u64,
        global = true
    )]
    pub timeout_seconds: u64,
}

impl ApiConfig {
    /// Configuration for an API at `url` with no token and the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            token: None,
            timeout_seconds: 10,
        }
    }

    /// Request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
