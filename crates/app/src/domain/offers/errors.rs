//! Offers service errors.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum OffersServiceError {
    #[error("offers API URL is not configured")]
    MissingUrl,

    #[error("offers API URL is invalid")]
    InvalidUrl(#[from] url::ParseError),

    #[error("offers API URL cannot carry a path: {0}")]
    UnsupportedUrl(Url),

    #[error("offer not found")]
    NotFound,

    #[error("offers API rejected the request: {0}")]
    Rejected(String),

    #[error("offers API responded with unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("offers API response is missing data")]
    MissingData,

    #[error("invalid offers API response")]
    Decode(#[from] serde_json::Error),

    #[error("offers API request failed")]
    Http(#[from] reqwest::Error),
}
