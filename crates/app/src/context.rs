//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    config::ApiConfig,
    domain::offers::{HttpOffersService, OffersService, OffersServiceError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build offers API client")]
    OffersClient(#[source] OffersServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub offers: Arc<dyn OffersService>,
}

impl AppContext {
    /// Wrap an existing offers service.
    pub fn new(offers: Arc<dyn OffersService>) -> Self {
        Self { offers }
    }

    /// Build application context from API configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the API URL is missing or the HTTP client cannot be built.
    pub fn from_api_config(config: &ApiConfig) -> Result<Self, AppInitError> {
        let offers = HttpOffersService::new(config).map_err(AppInitError::OffersClient)?;

        Ok(Self::new(Arc::new(offers)))
    }
}
