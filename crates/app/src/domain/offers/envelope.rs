//! Response Envelope

use serde::Deserialize;

use crate::domain::offers::errors::OffersServiceError;

/// `{ success, data, error }` wrapper around every offers API response.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> Envelope<T> {
    /// Whether the API reported success.
    pub(crate) const fn is_success(&self) -> bool {
        self.success
    }

    /// Unwrap the payload of a successful response.
    pub(crate) fn into_data(self) -> Result<T, OffersServiceError> {
        self.check()?;

        self.data.ok_or(OffersServiceError::MissingData)
    }

    /// Check a response whose payload is not needed.
    pub(crate) fn check(&self) -> Result<(), OffersServiceError> {
        if self.success {
            return Ok(());
        }

        Err(OffersServiceError::Rejected(
            self.error
                .clone()
                .unwrap_or_else(|| "unknown error".to_string()),
        ))
    }
}
